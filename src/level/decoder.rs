use crate::engines::evaluation::Decoder;
use crate::engines::generation::Genome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One column-wide piece of an overground level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Flat,
    Gap,
    Hill,
    Enemy,
    Coin,
    Block,
    Pipe,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 7] = [
        SegmentKind::Flat,
        SegmentKind::Gap,
        SegmentKind::Hill,
        SegmentKind::Enemy,
        SegmentKind::Coin,
        SegmentKind::Block,
        SegmentKind::Pipe,
    ];

    /// Every symbol maps to some kind, so any genome decodes
    pub fn from_symbol(symbol: char) -> Self {
        let offset = if symbol.is_ascii_lowercase() {
            symbol as u32 - 'a' as u32
        } else {
            symbol as u32
        };
        Self::ALL[(offset % Self::ALL.len() as u32) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn glyph(self) -> char {
        match self {
            SegmentKind::Flat => '_',
            SegmentKind::Gap => ' ',
            SegmentKind::Hill => '^',
            SegmentKind::Enemy => 'e',
            SegmentKind::Coin => 'o',
            SegmentKind::Block => '#',
            SegmentKind::Pipe => '|',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub segments: Vec<SegmentKind>,
}

impl Level {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|&&segment| segment == kind).count()
    }

    /// Longest stretch of consecutive gaps
    pub fn longest_gap_run(&self) -> usize {
        let mut longest = 0;
        let mut current = 0;
        for segment in &self.segments {
            if *segment == SegmentKind::Gap {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment.glyph())?;
        }
        Ok(())
    }
}

/// Reads a genome one symbol per segment
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelDecoder;

impl Decoder for LevelDecoder {
    type Artifact = Level;

    fn decode(&self, genome: &Genome) -> anyhow::Result<Level> {
        Ok(Level {
            segments: genome.sequence().iter().map(|&s| SegmentKind::from_symbol(s)).collect(),
        })
    }
}
