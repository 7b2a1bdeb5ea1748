use super::layout::WheelLayout;
use super::session::Session;
use super::theme::{ThemeColors, set_source};
use super::{CENTER_CIRCLE_RADIUS, HIGHLIGHT_WIDTH, OUTLINE_WIDTH, PRIZE_FONT_SIZE, RAY_WIDTH};
use crate::wheel::Sector;
use cairo::{Context, Format, ImageSurface};
use palette::Srgba;
use std::f64::consts::TAU;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

struct SectorRenderer<'a> {
    sector: &'a Sector,
    layout: &'a WheelLayout,
    fill: Srgba<f64>,
}

impl<'a> SectorRenderer<'a> {
    fn new(sector: &'a Sector, layout: &'a WheelLayout, fill: Srgba<f64>) -> Self {
        Self {
            sector,
            layout,
            fill,
        }
    }

    fn trace(&self, cr: &Context) {
        let c = self.layout.center;
        cr.move_to(c.x, c.y);
        cr.arc(c.x, c.y, self.layout.radius, self.sector.start, self.sector.end);
        cr.close_path();
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.trace(cr);
        set_source(cr, self.fill);
        cr.fill_preserve()?;
        set_source(cr, colors.outline);
        cr.set_line_width(OUTLINE_WIDTH * self.layout.scale);
        cr.stroke()
    }

    fn draw_highlight(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.trace(cr);
        set_source(cr, colors.highlight);
        cr.set_line_width(HIGHLIGHT_WIDTH * self.layout.scale);
        cr.stroke()
    }
}

/// Draws the whole scene: wheel, hovered sector, ray and prize.
pub fn draw(cr: &Context, session: &Session, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let layout = session.layout();
    set_source(cr, colors.background);
    cr.paint()?;

    if session.sectors().is_empty() {
        draw_empty_rim(cr, layout, colors)?;
    }

    let renderers: Vec<_> = session
        .sectors()
        .iter()
        .map(|s| SectorRenderer::new(s, layout, colors.sector(session.color_of(&s.label))))
        .collect();
    for renderer in &renderers {
        renderer.draw(cr, colors)?;
    }
    // on top, so neighbours don't paint over the outline
    if let Some(hovered) = session.hover_index().and_then(|i| renderers.get(i)) {
        hovered.draw_highlight(cr, colors)?;
    }

    draw_ray(cr, session, colors)?;
    draw_center_circle(cr, layout, colors)?;
    draw_prize(cr, session, colors)
}

fn draw_empty_rim(
    cr: &Context,
    layout: &WheelLayout,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.outline);
    cr.set_line_width(OUTLINE_WIDTH * layout.scale);
    cr.arc(layout.center.x, layout.center.y, layout.radius, 0.0, TAU);
    cr.stroke()
}

fn draw_ray(cr: &Context, session: &Session, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Some(heading) = session.heading() else {
        return Ok(());
    };
    let layout = session.layout();
    let tip = layout.ray_tip(session.resolver().displayed_ray(heading));

    set_source(cr, colors.ray);
    cr.set_line_width(RAY_WIDTH * layout.scale);
    cr.set_line_cap(cairo::LineCap::Round);
    cr.move_to(layout.center.x, layout.center.y);
    cr.line_to(tip.x, tip.y);
    cr.stroke()
}

fn draw_center_circle(
    cr: &Context,
    layout: &WheelLayout,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.center_circle);
    cr.arc(
        layout.center.x,
        layout.center.y,
        CENTER_CIRCLE_RADIUS * layout.scale,
        0.0,
        TAU,
    );
    cr.fill()
}

fn draw_prize(cr: &Context, session: &Session, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Some(prize) = session.prize() else {
        return Ok(());
    };
    let layout = session.layout();
    let size = PRIZE_FONT_SIZE * layout.scale;

    set_source(cr, colors.text);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size);
    cr.move_to(size / 2.0, size * 1.5);
    cr.show_text(&prize.to_string())
}

/// Renders the current scene at viewport size and writes it as a PNG.
pub fn render_png(
    session: &Session,
    colors: &ThemeColors,
    path: &Path,
) -> Result<(), SnapshotError> {
    let layout = session.layout();
    let surface = ImageSurface::create(Format::ARgb32, layout.width as i32, layout.height as i32)?;
    {
        let cr = Context::new(&surface)?;
        draw(&cr, session, colors)?;
    }

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}
