pub mod accordion;
pub mod accordion_item;
pub mod body;
pub mod content;
pub mod heading;

pub use accordion::{Accordion, AccordionPanel};
pub use accordion_item::AccordionItem;
pub use body::Body;
pub use content::Content;
pub use heading::Heading;
