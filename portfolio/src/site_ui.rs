//! Page overlay rendered with egui on top of the animated background
//!
//! A fixed navbar plus one scrollable column holding the hero, about,
//! projects, and contact sections. Panels use transparent frames so the
//! particle scene stays visible behind the text.

use egui::{
    Align, Color32, Frame, Layout, Margin, ProgressBar, RichText, Rounding, ScrollArea, Stroke,
};

use crate::content::{
    Section, ABOUT_PARAGRAPHS, ALL_REPOS_URL, AVAILABILITY, CONTACT_BLURB, CONTACT_EMAIL,
    GITHUB_URL, HERO_TITLES, NAV_LINKS, OWNER_NAME, PROJECTS, SITE_NAME, SKILLS, TAGLINE_PREFIX,
};
use crate::fx::{Reveal, Typewriter};

const ACCENT: Color32 = Color32::from_rgb(103, 232, 249);
const ACCENT_DIM: Color32 = Color32::from_rgb(147, 51, 234);
const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(16, 18, 28, 210);
const COLUMN_WIDTH: f32 = 760.0;

pub struct SiteUi {
    typewriter: Typewriter,
    reveal: Reveal,
    scroll_to: Option<Section>,
}

impl SiteUi {
    pub fn new() -> Self {
        Self {
            typewriter: Typewriter::new(HERO_TITLES, 0.08, 1.6),
            reveal: Reveal::default(),
            scroll_to: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, dt: f32) {
        self.typewriter.update(dt);
        self.navbar(ctx);
        self.page(ctx, dt);
    }

    fn navbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navbar")
            .frame(
                Frame::none()
                    .fill(Color32::from_rgba_premultiplied(8, 9, 16, 200))
                    .inner_margin(Margin::symmetric(24.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(SITE_NAME).size(20.0).strong().color(ACCENT));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for (label, section) in NAV_LINKS.iter().rev() {
                            if ui.link(*label).clicked() {
                                self.scroll_to = Some(*section);
                            }
                        }
                    });
                });
            });
    }

    fn page(&mut self, ctx: &egui::Context, dt: f32) {
        egui::CentralPanel::default()
            .frame(Frame::none())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(COLUMN_WIDTH);
                            self.hero(ui, viewport, dt);
                            self.about(ui, viewport, dt);
                            self.projects(ui, viewport, dt);
                            self.contact(ui, viewport, dt);
                            footer(ui);
                        });
                    });
            });
    }

    fn hero(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, dt: f32) {
        let typed = self.typewriter.text();
        section_frame(
            &mut self.reveal,
            &mut self.scroll_to,
            ui,
            Section::Hero,
            viewport,
            dt,
            |ui| {
                ui.add_space(viewport.height() * 0.22);
                pill(ui, AVAILABILITY);
                ui.add_space(12.0);
                ui.label(
                    RichText::new(OWNER_NAME)
                        .size(52.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(TAGLINE_PREFIX).size(26.0));
                    ui.label(RichText::new(typed).size(26.0).color(ACCENT));
                    ui.label(RichText::new("_").size(26.0).color(ACCENT));
                });
                ui.add_space(20.0);
                let mut nav = None;
                ui.horizontal(|ui| {
                    if primary_button(ui, "View Projects") {
                        nav = Some(Section::Projects);
                    }
                    if ghost_button(ui, "Get in Touch") {
                        nav = Some(Section::Contact);
                    }
                });
                ui.add_space(viewport.height() * 0.3);
                nav
            },
        );
    }

    fn about(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, dt: f32) {
        section_frame(
            &mut self.reveal,
            &mut self.scroll_to,
            ui,
            Section::About,
            viewport,
            dt,
            |ui| {
                section_heading(ui, "About Me");
                for paragraph in ABOUT_PARAGRAPHS {
                    ui.label(RichText::new(*paragraph).size(15.0));
                    ui.add_space(8.0);
                }
                ui.add_space(16.0);
                ui.label(RichText::new("Skills").size(22.0).strong());
                ui.add_space(8.0);
                for skill in SKILLS {
                    card(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(skill.category.icon());
                            ui.label(RichText::new(skill.name).strong());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.weak(skill.category.label());
                            });
                        });
                        ui.add(
                            ProgressBar::new(f32::from(skill.level) / 100.0)
                                .fill(ACCENT_DIM)
                                .desired_height(6.0),
                        );
                    });
                    ui.add_space(6.0);
                }
                ui.add_space(48.0);
                None
            },
        );
    }

    fn projects(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, dt: f32) {
        section_frame(
            &mut self.reveal,
            &mut self.scroll_to,
            ui,
            Section::Projects,
            viewport,
            dt,
            |ui| {
                section_heading(ui, "Projects");
                for project in PROJECTS {
                    card(ui, |ui| {
                        ui.label(RichText::new(project.title).size(18.0).strong());
                        ui.add_space(4.0);
                        ui.label(project.description);
                        ui.add_space(8.0);
                        ui.horizontal_wrapped(|ui| {
                            for tag in project.tags {
                                tag_chip(ui, tag);
                            }
                        });
                        ui.add_space(6.0);
                        ui.hyperlink_to("View on GitHub \u{2197}", project.link);
                    });
                    ui.add_space(10.0);
                }
                ui.hyperlink_to("All repositories \u{2197}", ALL_REPOS_URL);
                ui.add_space(48.0);
                None
            },
        );
    }

    fn contact(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, dt: f32) {
        section_frame(
            &mut self.reveal,
            &mut self.scroll_to,
            ui,
            Section::Contact,
            viewport,
            dt,
            |ui| {
                section_heading(ui, "Get In Touch");
                ui.label(RichText::new(CONTACT_BLURB).size(15.0));
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.hyperlink_to(
                        RichText::new("\u{2709} Say Hello").size(16.0),
                        format!("mailto:{CONTACT_EMAIL}"),
                    );
                    ui.add_space(16.0);
                    ui.hyperlink_to(RichText::new("GitHub").size(16.0), GITHUB_URL);
                });
                ui.add_space(64.0);
                None
            },
        );
    }
}

impl Default for SiteUi {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one page section: fade it in the first time it scrolls into view,
/// honor a pending scroll-to request targeting it, and collect any nav
/// target clicked inside it.
fn section_frame(
    reveal: &mut Reveal,
    scroll_to: &mut Option<Section>,
    ui: &mut egui::Ui,
    section: Section,
    viewport: egui::Rect,
    dt: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> Option<Section>,
) {
    let result = ui.scope(|ui| {
        let probe = ui.next_widget_position();
        let visible = viewport.y_range().contains(probe.y);
        let opacity = reveal.opacity(section_key(section), visible, dt);
        ui.set_opacity(opacity);
        add_contents(ui)
    });

    if *scroll_to == Some(section) {
        ui.scroll_to_rect(result.response.rect, Some(Align::TOP));
        *scroll_to = None;
    }
    if let Some(target) = result.inner {
        *scroll_to = Some(target);
    }
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Hero => "hero",
        Section::About => "about",
        Section::Projects => "projects",
        Section::Contact => "contact",
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(24.0);
    ui.label(RichText::new(title).size(32.0).strong().color(Color32::WHITE));
    ui.add_space(12.0);
}

fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    Frame::none()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, Color32::from_rgb(40, 44, 60)))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn pill(ui: &mut egui::Ui, text: &str) {
    Frame::none()
        .fill(Color32::from_rgba_premultiplied(20, 50, 40, 200))
        .stroke(Stroke::new(1.0, Color32::from_rgb(52, 211, 153)))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("\u{25cf} {text}"))
                    .size(13.0)
                    .color(Color32::from_rgb(52, 211, 153)),
            );
        });
}

fn tag_chip(ui: &mut egui::Ui, tag: &str) {
    Frame::none()
        .fill(Color32::from_rgba_premultiplied(30, 34, 52, 220))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).size(12.0).color(ACCENT));
        });
}

fn primary_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(
        egui::Button::new(RichText::new(label).size(16.0).color(Color32::BLACK))
            .fill(ACCENT)
            .rounding(Rounding::same(8.0))
            .min_size(egui::vec2(140.0, 38.0)),
    )
    .clicked()
}

fn ghost_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(
        egui::Button::new(RichText::new(label).size(16.0))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, ACCENT))
            .rounding(Rounding::same(8.0))
            .min_size(egui::vec2(140.0, 38.0)),
    )
    .clicked()
}

fn footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(8.0);
    ui.weak(format!(
        "\u{00a9} 2025 {OWNER_NAME}. Built with wgpu and egui."
    ));
    ui.add_space(16.0);
}
