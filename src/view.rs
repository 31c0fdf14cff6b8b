use std::fs;
use std::sync::Arc;

use eframe::{egui, App, CreationContext, Frame};
use egui::{Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use tracing::{error, warn};

use crate::config::Config;
use crate::models::{Field, Table};
use crate::storage::KeyValueStore;
use crate::store::{Action, TableStore};

const ROW_HEIGHT: f32 = 30.0;

pub struct WorkoutTablesApp<S> {
    store: TableStore<S>,
    status: Status,
}

enum Status {
    Idle,
    Error(String),
}

impl<S: KeyValueStore> WorkoutTablesApp<S> {
    pub fn new(cc: &CreationContext, config: &Config, store: TableStore<S>) -> Self {
        install_font(&cc.egui_ctx, config);
        apply_text_styles(&cc.egui_ctx);
        Self::with_store(store)
    }

    pub fn with_store(store: TableStore<S>) -> Self {
        Self {
            store,
            status: Status::Idle,
        }
    }

    pub fn store(&self) -> &TableStore<S> {
        &self.store
    }

    /// Draws one frame, then dispatches whatever the user changed during it.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.show_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.add_space(10.0);
                ui.heading(RichText::new("Workout Plan - Editable Tables").strong());
                ui.add_space(10.0);
                if ui.button("Agregar Nueva Tabla").clicked() {
                    actions.push(Action::AddTable);
                }
                ui.add_space(20.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (table_index, table) in self.store.collection().tables.iter().enumerate() {
                            ui.push_id(table_index, |ui| {
                                show_table(ui, table_index, table, &mut actions);
                            });
                            ui.add_space(30.0);
                        }
                    });
            });
        });

        for action in actions {
            self.handle(action);
        }
    }

    fn handle(&mut self, action: Action) {
        match self.store.dispatch(action) {
            Ok(()) => self.status = Status::Idle,
            Err(e) => {
                error!("could not apply edit: {}", e);
                self.status = Status::Error(e.to_string());
            }
        }
    }

    fn show_status(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let tables = self.store.collection().tables.len();
            ui.label(format!("{} table{}", tables, if tables == 1 { "" } else { "s" }));
            ui.separator();
            match &self.status {
                Status::Error(message) => {
                    ui.colored_label(ui.visuals().error_fg_color, message);
                }
                Status::Idle => match self.store.last_saved() {
                    Some(at) => {
                        ui.label(format!("Saved at {}", at.format("%H:%M:%S")));
                    }
                    None => {
                        ui.label("No changes yet");
                    }
                },
            }
        });
    }
}

impl<S: KeyValueStore> App for WorkoutTablesApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

fn table_name_id(table_index: usize) -> egui::Id {
    egui::Id::new(("table-name", table_index))
}

fn show_table(ui: &mut Ui, table_index: usize, table: &Table, actions: &mut Vec<Action>) {
    let mut name = table.name.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut name)
            .id(table_name_id(table_index))
            .font(egui::TextStyle::Heading)
            .horizontal_align(Align::Center)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(Action::RenameTable {
            table: table_index,
            name,
        });
    }

    ui.add_space(10.0);
    if ui.button("Agregar Nuevo Ejercicio").clicked() {
        actions.push(Action::AddExercise { table: table_index });
    }
    ui.add_space(10.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(140.0).resizable(true), Field::ALL.len() - 1)
        .column(Column::remainder().at_least(200.0))
        .header(ROW_HEIGHT, |mut header| {
            for field in Field::ALL {
                header.col(|ui| {
                    ui.strong(field.header());
                });
            }
        })
        .body(|mut body| {
            for (exercise_index, record) in table.exercises.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    for field in Field::ALL {
                        row.col(|ui| {
                            let mut value = record.get(field).to_string();
                            let edit = egui::TextEdit::singleline(&mut value)
                                .desired_width(f32::INFINITY);
                            if ui.add(edit).changed() {
                                actions.push(Action::SetField {
                                    table: table_index,
                                    exercise: exercise_index,
                                    field,
                                    value,
                                });
                            }
                        });
                    }
                });
            }
        });
}

fn install_font(ctx: &egui::Context, config: &Config) {
    let Some(path) = &config.font_path else {
        return;
    };
    let font_data = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), "failed to open font file: {}", e);
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "custom".to_owned(),
        Arc::from(egui::FontData::from_owned(font_data)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "custom".to_owned());
    }
    ctx.set_fonts(fonts);
}

fn apply_text_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(16.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(16.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(24.0, egui::FontFamily::Proportional),
    );
    ctx.set_style(style);
}
