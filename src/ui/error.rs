//! Error reporting for the binary.
//!
//! Load failures and malformed catalogs get different headlines so the user
//! can tell an unreachable source from a broken file.

use doccat::{CatalogError, ErrorKind};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Headline and optional hint for one error
struct Report {
    headline: &'static str,
    detail: String,
    hint: Option<&'static str>,
}

fn report_for(err: &CatalogError) -> Report {
    match err {
        CatalogError::Load { source_id, message } => Report {
            headline: "could not reach the catalog",
            detail: format!("{}: {}", source_id, message),
            hint: Some("check the path or URL, or run `doccat build` to generate the catalog"),
        },
        CatalogError::Schema { location, message } => Report {
            headline: "catalog file is malformed",
            detail: format!("at {}: {}", location, message),
            hint: Some("regenerate it with `doccat build`"),
        },
        CatalogError::UnknownSection { .. } => Report {
            headline: "no such section",
            detail: err.to_string(),
            hint: Some("run `doccat sections` to list the available sections"),
        },
        CatalogError::InvalidConfig { .. } => Report {
            headline: "invalid configuration",
            detail: err.to_string(),
            hint: None,
        },
        _ => Report {
            headline: "error",
            detail: err.to_string(),
            hint: None,
        },
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(catalog_err) = err.downcast_ref::<CatalogError>() else {
        return format!(
            "{} {:#}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            err
        );
    };

    let report = report_for(catalog_err);
    let mut out = format!(
        "{} {}\n  {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(report.headline).bold().render(supports_color),
        report.detail
    );
    if let Some(hint) = report.hint {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<CatalogError>().map(CatalogError::kind)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "kind": error_kind(err),
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
