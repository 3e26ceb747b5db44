/// Branch glyph placed in front of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// The node's only entry.
    Lone,
    /// First of several entries.
    Start,
    /// Neither first nor last.
    Mid,
    /// Last of several entries; nothing hangs below it.
    End,
}

pub(crate) const CONTINUATION_BAR: &str = "\u{2503} "; // ┃

impl Connector {
    /// Pick the connector for entry `index` of a node with `total` entries.
    pub fn select(index: usize, total: usize) -> Self {
        if index == 0 && total == 1 {
            Connector::Lone
        } else if index == 0 {
            Connector::Start
        } else if index + 1 == total {
            Connector::End
        } else {
            Connector::Mid
        }
    }

    /// Glyph plus its trailing space.
    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Lone => "\u{2501} ",  // ━
            Connector::Start => "\u{2533} ", // ┳
            Connector::Mid => "\u{2523} ",   // ┣
            Connector::End => "\u{2517} ",   // ┗
        }
    }

    /// Whether lines below this entry still draw the trunk.
    pub fn continues_trunk(self) -> bool {
        self != Connector::End
    }
}
