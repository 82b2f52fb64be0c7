use crate::stats::PHRED33_OFFSET;

pub(crate) const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// How readers react to structurally malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop truncated or out-of-place lines without reporting them.
    #[default]
    Lenient,
    /// Yield an error item for every malformed group.
    Strict,
}

impl ParseMode {
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    pub mode: ParseMode,
    pub buffer_capacity: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            buffer_capacity: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ReaderOptions {
    pub fn strict() -> Self {
        Self::default().with_mode(ParseMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

/// Whether base counting folds lowercase (soft-masked) bases into uppercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Only uppercase `G`, `C` and `N` are counted.
    #[default]
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub case: CaseSensitivity,
    pub quality_offset: u8,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            case: CaseSensitivity::Sensitive,
            quality_offset: PHRED33_OFFSET,
        }
    }
}

impl StatsOptions {
    pub fn with_case(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }
}
