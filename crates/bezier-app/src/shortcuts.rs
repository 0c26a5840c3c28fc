//! Mouse and keyboard binding registry and documentation.

/// An input binding.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub input: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(input: &'static str, description: &'static str) -> Self {
        Self { input, description }
    }

    /// Format the binding for display.
    pub fn format(&self) -> String {
        format!("{:20} {}", self.input, self.description)
    }
}

/// Registry of all bindings.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered bindings.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Drag", "Move the control point under the cursor"),
            Shortcut::new("Double-click", "Add a control point and start dragging it"),
            Shortcut::new("Delete", "Delete the dragged control point"),
            Shortcut::new("Backspace", "Delete the dragged control point"),
            Shortcut::new("Wheel", "Change curve precision"),
            Shortcut::new("Escape", "Cancel drag, or quit when idle"),
        ]
    }

    /// Print all bindings to console.
    pub fn print_all() {
        println!("\n=== Controls ===");
        for shortcut in Self::all() {
            println!("  {}", shortcut.format());
        }
        println!();
    }
}
