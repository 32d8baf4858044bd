use eframe::egui::{Context, Visuals};

use crate::ui::ui_config::UI_CONFIG;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Signed dollar change plus percent of the base, e.g. "+12.40 (+4.96%)".
pub fn format_change(change: f64, base: f64) -> String {
    let pct = if base.abs() > f64::EPSILON {
        change / base * 100.0
    } else {
        0.0
    };
    format!("{:+.2} ({:+.2}%)", change, pct)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_formatting() {
        assert_eq!(format_change(12.4, 250.0), "+12.40 (+4.96%)");
        assert_eq!(format_change(-5.0, 250.0), "-5.00 (-2.00%)");
        assert_eq!(format_change(1.0, 0.0), "+1.00 (+0.00%)");
    }
}
