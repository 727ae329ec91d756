// Fixed hotspot catalog for the garden scene.
//
// Placements are percentages of the scene container so regions stay aligned
// with the artwork at any resolution.

/// Region of the scene in percent of the container (top, left, width, height).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Inline CSS for an absolutely positioned region.
    pub fn css(&self) -> String {
        format!(
            "top:{}%;left:{}%;width:{}%;height:{}%",
            self.top, self.left, self.width, self.height
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Hotspot {
    pub id: &'static str,
    pub placement: Placement,
    pub clue: &'static str,
}

pub static HOTSPOTS: [Hotspot; 6] = [
    Hotspot {
        id: "rose-1",
        placement: Placement::new(25.0, 15.0, 6.0, 8.0),
        clue: "The first petal whispers of beginnings, stolen from the thorns of ambition.",
    },
    Hotspot {
        id: "rose-2",
        placement: Placement::new(40.0, 60.0, 6.0, 8.0),
        clue: "The second rose blooms in shadow, where desire grows without light.",
    },
    Hotspot {
        id: "rose-3",
        placement: Placement::new(65.0, 30.0, 6.0, 8.0),
        clue: "Third among the stolen: beauty taken, never earned.",
    },
    Hotspot {
        id: "rose-4",
        placement: Placement::new(50.0, 80.0, 6.0, 8.0),
        clue: "Four petals fall when greed plucks what was never meant to be possessed.",
    },
    Hotspot {
        id: "rose-5",
        placement: Placement::new(20.0, 70.0, 6.0, 8.0),
        clue: "The fifth rose remembers the gardener's touch, before the theft.",
    },
    Hotspot {
        id: "rose-6",
        placement: Placement::new(70.0, 65.0, 6.0, 8.0),
        clue: "The final fragment reveals: what you take withers; what you grow endures.",
    },
];

const ROMAN_NUMERALS: [&str; 6] = ["I", "II", "III", "IV", "V", "VI"];

/// Read-only view over a fixed set of hotspots.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    hotspots: &'static [Hotspot],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&HOTSPOTS)
    }
}

impl Catalog {
    pub const fn new(hotspots: &'static [Hotspot]) -> Self {
        Self { hotspots }
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Hotspot> {
        self.hotspots.iter()
    }

    pub fn get(&self, id: &str) -> Option<&'static Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.hotspots.iter().position(|h| h.id == id)
    }

    /// Tooltip label for a region, e.g. "Fragment III".
    pub fn label(&self, id: &str) -> Option<String> {
        let idx = self.position(id)?;
        let numeral = ROMAN_NUMERALS
            .get(idx)
            .map(|n| n.to_string())
            .unwrap_or_else(|| (idx + 1).to_string());
        Some(format!("Fragment {numeral}"))
    }
}
