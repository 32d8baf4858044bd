pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod scale;
pub mod view;

pub use interaction::{ChartCommand, ChartFrame, Interaction, Notice, NoticeKind, Output, PointerEvent};
pub use scale::ChartScale;
pub use view::ChartView;
