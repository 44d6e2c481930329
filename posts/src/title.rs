use crate::{entry::PostData, PostEntry};

pub trait Title {
    fn title(&self) -> &str;
}

impl Title for PostData {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Title for PostEntry {
    fn title(&self) -> &str {
        self.data.title()
    }
}
