//! Menu bar rendering the fixed menu layout

use app_core::{Command, CommandRegistry, I18n, MENUS};
use egui::Ui;

/// Menu bar component
pub struct MenuBar;

impl MenuBar {
    /// Render the menus; returns the command of a clicked item
    pub fn ui(ui: &mut Ui, registry: &CommandRegistry, i18n: &I18n) -> Option<Command> {
        let mut action = None;

        egui::menu::bar(ui, |ui| {
            for menu in MENUS.iter() {
                let title = format!("{}({})", i18n.get(menu.title_key), menu.mnemonic);

                ui.menu_button(title, |ui| {
                    for id in menu.items {
                        let Some(spec) = registry.spec(id) else {
                            tracing::warn!("Menu item {} is not registered", id);
                            continue;
                        };

                        let mut button = egui::Button::new(i18n.get(spec.label_key));
                        if let Some(shortcut) = spec.shortcut {
                            button = button.shortcut_text(shortcut);
                        }

                        if ui.add(button).clicked() {
                            action = Some(Command::new(id));
                            ui.close_menu();
                        }
                    }
                });
            }
        });

        action
    }
}
