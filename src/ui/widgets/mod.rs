pub mod alert;
pub mod tooltip;

pub use alert::AlertPopup;
pub use tooltip::{Tooltip, TooltipRegistry};
