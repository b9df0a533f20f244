//! Terminal output with optional Markdown styling via termimad.

use termimad::{crossterm::style::Color, MadSkin};

/// Renders Markdown to the terminal, styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints Markdown. Headers keep their hash marks and are colored by
    /// hand; table blocks go through termimad's table layout.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        let mut table = Vec::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push(line);
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
    }

    /// Prints text that must not be styled, such as JSON.
    pub fn render_raw(&self, text: &str) {
        print!("{text}");
    }

    fn flush_table(&self, table: &mut Vec<&str>) {
        if table.is_empty() {
            return;
        }
        self.skin.print_text(&table.join("\n"));
        table.clear();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
