use std::fmt;

pub const ACCORDION: &str = "accordion";
pub const ITEM: &str = "accordion-item";
pub const ITEM_ACTIVE: &str = "active";
pub const HEADING: &str = "accordion-item_heading";
pub const TITLE_CONTAINER: &str = "accordion-item_title-container";
pub const ICON_CONTAINER: &str = "accordion-item_icon-container";
pub const ICON: &str = "accordion-item_icon";
pub const CONTENT_CONTAINER: &str = "accordion-item_content-container";
pub const CONTENT: &str = "accordion-item_content";

/// Space-separated class attribute builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new(base: &str) -> Self {
        Self(vec![base.to_string()])
    }

    /// Appends `class` unless it is `None` or blank.
    pub fn with(mut self, class: Option<&str>) -> Self {
        if let Some(class) = class.map(str::trim).filter(|c| !c.is_empty()) {
            self.0.push(class.to_string());
        }
        self
    }

    pub fn with_if(self, class: &str, condition: bool) -> Self {
        if condition {
            self.with(Some(class))
        } else {
            self
        }
    }

    pub fn build(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Container class: base, host class, and the closed class while empty.
pub fn accordion_class(class: Option<&str>, closed_class: Option<&str>, is_closed: bool) -> String {
    let list = ClassList::new(ACCORDION).with(class);
    match closed_class {
        Some(closed) if is_closed => list.with(Some(closed)).build(),
        _ => list.build(),
    }
}

pub fn item_class(extra: Option<&str>, is_active: bool) -> String {
    ClassList::new(ITEM)
        .with_if(ITEM_ACTIVE, is_active)
        .with(extra)
        .build()
}
