use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The effective configuration, as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// and then to a platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&requested, path) {
            success(format!("Configuration file edited using '{}'", requested));
            return Ok(());
        }

        if requested != default_editor {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            ));
            if run_editor(&default_editor, path) {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "Failed to edit {} with '{}'",
            path.display(),
            requested
        )))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
