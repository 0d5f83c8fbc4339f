//! Script and stylesheet injection for panels.
//!
//! Two sources, both relative to the shell's script directory:
//! - Auto-discovery: `scripts/<slug>.js` and `scripts/<slug>.css`, where
//!   the slug is the panel title lowercased with spaces as dashes.
//! - Explicit `script:` / `css:` paths from the panel config.
//!
//! Missing files are skipped with a log line, never fatal. CSS is
//! delivered as a script that appends a `<style>` element, since the
//! WebView only executes JavaScript.

use std::path::Path;

use tracing::{debug, warn};

use homedeck_layout::Panel;

/// Subdirectory holding auto-discovered panel scripts and styles.
pub const SCRIPTS_DIR: &str = "scripts";

/// Derive the auto-discovery file stem from a panel title.
pub fn title_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Escape CSS text for embedding inside a double-quoted JS string literal.
pub fn escape_css_for_js(css: &str) -> String {
    css.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

/// Wrap CSS in a script that appends it to the document head.
pub fn style_append_script(css: &str) -> String {
    format!(
        "(function() {{ var style = document.createElement('style'); style.textContent = \"{}\"; document.head.appendChild(style); }})();",
        escape_css_for_js(css)
    )
}

/// Collect the scripts to evaluate in a panel after each page load, in
/// injection order: discovered JS, discovered CSS, explicit JS, explicit
/// CSS.
pub fn collect_scripts(panel: &Panel, script_dir: &Path) -> Vec<String> {
    let mut scripts = Vec::new();
    let slug = title_slug(&panel.title);

    let auto_js = script_dir.join(SCRIPTS_DIR).join(format!("{slug}.js"));
    if let Some(content) = read_optional(&auto_js) {
        scripts.push(content);
    }

    let auto_css = script_dir.join(SCRIPTS_DIR).join(format!("{slug}.css"));
    if let Some(content) = read_optional(&auto_css) {
        scripts.push(style_append_script(&content));
    }

    if let Some(path) = &panel.script {
        if let Some(content) = read_optional(&script_dir.join(path)) {
            scripts.push(content);
        }
    }

    if let Some(path) = &panel.css {
        if let Some(content) = read_optional(&script_dir.join(path)) {
            scripts.push(style_append_script(&content));
        }
    }

    scripts
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no injectable file at {}", path.display());
            None
        }
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(title: &str, script: Option<&str>, css: Option<&str>) -> Panel {
        Panel {
            title: title.to_string(),
            name: title.to_string(),
            url: "about:blank".to_string(),
            script: script.map(String::from),
            css: css.map(String::from),
            fixed_width: None,
        }
    }

    #[test]
    fn slug_lowercases_and_dashes() {
        assert_eq!(title_slug("Google Tasks"), "google-tasks");
        assert_eq!(title_slug("Chat"), "chat");
        assert_eq!(title_slug("A B C"), "a-b-c");
    }

    #[test]
    fn css_escaping_handles_quotes_backslashes_newlines() {
        let css = "body::before { content: \"x\\2014\"; }\ndiv { color: red; }";
        let escaped = escape_css_for_js(css);
        assert_eq!(
            escaped,
            "body::before { content: \\\"x\\\\2014\\\"; } div { color: red; }"
        );
        assert!(!escaped.contains('\n'));
    }

    #[test]
    fn style_append_script_wraps_css() {
        let script = style_append_script("body { margin: 0 }");
        assert!(script.starts_with("(function() {"));
        assert!(script.contains("document.createElement('style')"));
        assert!(script.contains("body { margin: 0 }"));
        assert!(script.contains("document.head.appendChild(style)"));
    }

    #[test]
    fn collects_discovered_and_explicit_sources() {
        let dir = tempfile::tempdir().unwrap();
        let scripts_dir = dir.path().join(SCRIPTS_DIR);
        std::fs::create_dir(&scripts_dir).unwrap();
        std::fs::write(scripts_dir.join("google-tasks.js"), "console.log(1);").unwrap();
        std::fs::write(scripts_dir.join("google-tasks.css"), "body { margin: 0 }").unwrap();
        std::fs::write(dir.path().join("extra.js"), "console.log(2);").unwrap();

        let panel = panel("Google Tasks", Some("extra.js"), None);
        let scripts = collect_scripts(&panel, dir.path());
        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0], "console.log(1);");
        assert!(scripts[1].contains("body { margin: 0 }"));
        assert_eq!(scripts[2], "console.log(2);");
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let panel = panel("Nothing Here", Some("missing.js"), Some("missing.css"));
        assert!(collect_scripts(&panel, dir.path()).is_empty());
    }
}
