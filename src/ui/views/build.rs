use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_header(
    docs_dir: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Doccat Build");
    header.add("Source", docs_dir);
    header.add("Output", output);
    header.render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    output: &str,
    sections: usize,
    files: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "\n{} {} {} ({} sections, {} documents)\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Catalog written to").render(supports_color),
        output,
        sections,
        files
    )
}
