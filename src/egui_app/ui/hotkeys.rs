use crate::egui_app::controller::TabCommand;
use crate::egui_app::state::Tab;
use eframe::egui::{self, Key};

const TAB_KEYS: [(Key, Tab); 4] = [
    (Key::Num1, Tab::Overview),
    (Key::Num2, Tab::AtRisk),
    (Key::Num3, Tab::Model),
    (Key::Num4, Tab::Cohorts),
];

/// Map a pressed key to a tab command.
pub(super) fn command_for_key(key: Key) -> Option<TabCommand> {
    match key {
        Key::ArrowRight => Some(TabCommand::Next),
        Key::ArrowLeft => Some(TabCommand::Previous),
        _ => TAB_KEYS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, tab)| TabCommand::Select(*tab)),
    }
}

/// First tab command pressed this frame, ignoring chords with modifiers.
pub(super) fn poll(ctx: &egui::Context) -> Option<TabCommand> {
    ctx.input(|input| {
        if input.modifiers.any() {
            return None;
        }
        input.events.iter().find_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !modifiers.any() => command_for_key(*key),
            _ => None,
        })
    })
}
