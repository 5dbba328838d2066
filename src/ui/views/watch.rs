use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use doccat::infrastructure::watcher::WatchEvent;

pub fn render_watch_header(
    docs_dir: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Doccat Watch");
    header.add("Source", docs_dir);
    header.add("Output", output);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { docs_dir, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            docs_dir
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildComplete { sections, files } => format!(
            "{} {} Catalog rebuilt: {} sections, {} documents\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            sections,
            files
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
