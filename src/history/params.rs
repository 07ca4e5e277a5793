#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D10,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D10 => "10d",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    D1,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::D1 => "1d",
        }
    }
}
