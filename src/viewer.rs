use std::f32::consts::TAU;

use anyhow::{anyhow, Context, Result};
use checkerboard::cli::BoardArgs;
use checkerboard::util::transforms::Transform;
use checkerboard::{Board, BoardError, Color, Rect, Surface};
use clap::Parser;
use eframe::egui;
use eframe::egui::{Color32, Pos2, Rounding, Stroke};
use egui::{pos2, Shape};

/// Vertices used to approximate a piece's ellipse.
const ELLIPSE_SEGMENTS: usize = 48;
const OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::BLACK,
};

#[derive(Debug, Parser)]
#[command(name = "viewer", about = "Checkerboard viewer")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.board.init_logging().context("failed to set up logging")?;

    let board = Board::new(cli.board.config())?;
    let size = board.size() as f32;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Checkers")
            .with_inner_size([size, size + 24.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Checkers",
        native_options,
        Box::new(move |cc| Box::new(CheckersViewer::new(cc, board))),
    )
    .map_err(|err| anyhow!("eframe failed to start: {err}"))
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Paints board-space primitives with an egui painter.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    board_to_screen: Transform,
}

impl PainterSurface<'_> {
    fn screen_rect(&self, rect: Rect) -> egui::Rect {
        self.board_to_screen.map_rect(egui::Rect::from_min_max(
            pos2(rect.x1 as f32, rect.y1 as f32),
            pos2(rect.x2 as f32, rect.y2 as f32),
        ))
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter
            .rect(self.screen_rect(rect), Rounding::ZERO, color32(color), OUTLINE);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let rect = self.screen_rect(rect);
        let center = rect.center();
        let radius = rect.size() / 2.0;
        let points = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                pos2(
                    center.x + radius.x * angle.cos(),
                    center.y + radius.y * angle.sin(),
                )
            })
            .collect();
        self.painter
            .add(Shape::convex_polygon(points, color32(color), OUTLINE));
    }
}

struct CheckersViewer {
    board: Board,
    pointer_pos: String,
    last_click: String,
}

impl CheckersViewer {
    fn new(_cc: &eframe::CreationContext<'_>, board: Board) -> Self {
        Self {
            board,
            pointer_pos: String::new(),
            last_click: String::new(),
        }
    }

    fn to_board_pixel(screen_to_board: &Transform, pos: Pos2) -> (i64, i64) {
        let p = screen_to_board.map_point(pos);
        (p.x.floor() as i64, p.y.floor() as i64)
    }

    fn paint_game(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let size = self.board.size() as f32;
        let board_to_screen = Transform::new_letterboxed(
            egui::Rect::from_min_max(Pos2::ZERO, pos2(size, size)),
            rect,
        );
        let screen_to_board = board_to_screen.inverse();
        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface {
            painter: &painter,
            board_to_screen,
        };

        self.pointer_pos = match ctx.pointer_latest_pos() {
            None => String::new(),
            Some(pos) => {
                let (x, y) = Self::to_board_pixel(&screen_to_board, pos);
                let cell = self.board.resolve_cell(x, y);
                format!("{cell} ({x}, {y})")
            }
        };

        let click = ctx.input(|i| {
            i.pointer
                .primary_clicked()
                .then(|| i.pointer.interact_pos())
                .flatten()
        });

        let Some(pos) = click.filter(|pos| rect.contains(*pos)) else {
            self.board.draw(&mut surface);
            return;
        };

        let (x, y) = Self::to_board_pixel(&screen_to_board, pos);
        match self.board.handle_click(x, y, &mut surface) {
            Ok(outcome) => {
                self.last_click = match outcome.piece {
                    Some(team) => format!("{} {team:?}", outcome.cell),
                    None => outcome.cell.to_string(),
                };
                // Squares were reset after this frame was drawn.
                ctx.request_repaint();
            }
            Err(BoardError::CellOutOfRange { .. }) => self.board.draw(&mut surface),
            Err(err) => panic!("board invariant violated: {err}"),
        }
    }
}

impl eframe::App for CheckersViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    let n = self.board.grid_size();
                    ui.label(format!("{n}x{n}, {} px cells", self.board.cell_length()));
                    if !self.last_click.is_empty() {
                        ui.label(format!("Clicked: {}", self.last_click));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.pointer_pos);
                });
            });
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.paint_game(ctx, ui));
    }
}
