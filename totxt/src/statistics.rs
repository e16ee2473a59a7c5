#[derive(Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub converted_files: u64,
    pub failed_files: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn processed_files(&self) -> u64 {
        self.converted_files + self.failed_files
    }
}
