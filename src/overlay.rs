use crate::sequencer::{OverlayContent, OverlaySink};

/// The 2D text layer above the 3D render. Holds the last content the
/// sequencer set and whether it is currently visible; drawing is a
/// fixed egui panel sampled once per frame.
#[derive(Debug)]
pub struct Overlay {
    content: Option<OverlayContent>,
    visible: bool,
    enabled: bool,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            content: None,
            visible: false,
            enabled: true,
        }
    }

    /// Overlay that tracks sequencer state but never draws (--no-ui).
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    pub fn draw(&self, ctx: &egui::Context) {
        let Some(content) = &self.content else {
            return;
        };
        if !self.visible || !self.enabled {
            return;
        }

        egui::Window::new("narrative")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(40.0, 40.0))
            .max_width(420.0)
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(content.title)
                        .size(28.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(content.body)
                        .size(15.0)
                        .color(egui::Color32::from_gray(210)),
                );
            });
    }
}

impl OverlaySink for Overlay {
    fn show(&mut self, content: &OverlayContent) {
        self.content = Some(*content);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
