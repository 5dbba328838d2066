use std::path::Path;

use doccat::config::{ConfigWarning, EnvWarning};

use crate::ui::primitives::icon::Icon;

pub fn format_config_warnings(
    path: &Path,
    warnings: &[ConfigWarning],
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", format_config_warnings(path, warnings, supports_unicode));
}

pub fn format_env_warnings(warnings: &[EnvWarning], supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    warnings
        .iter()
        .map(|w| {
            format!(
                "{} Ignoring {}='{}' (expected {})\n",
                icon, w.var, w.value, w.expected
            )
        })
        .collect()
}

pub fn print_env_warnings(warnings: &[EnvWarning], supports_unicode: bool) {
    eprint!("{}", format_env_warnings(warnings, supports_unicode));
}
