//! Texture table.
//!
//! Textures are descriptors rather than pixel data: a size in logical pixels
//! (which drives frame slicing and collision rectangles) plus a [`Look`] that
//! tells a host how to paint it. The table is owned by whoever drives the
//! game and lent to consumers by reference.

use std::collections::HashMap;

use crate::geometry::Tint;

// ── Keys ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundTheme {
    DesertDay,
    DesertNight,
    ForestDay,
    ForestNight,
}

impl BackgroundTheme {
    pub const ALL: [BackgroundTheme; 4] = [
        BackgroundTheme::DesertDay,
        BackgroundTheme::DesertNight,
        BackgroundTheme::ForestDay,
        BackgroundTheme::ForestNight,
    ];

    fn is_night(self) -> bool {
        matches!(self, BackgroundTheme::DesertNight | BackgroundTheme::ForestNight)
    }

    fn is_desert(self) -> bool {
        matches!(self, BackgroundTheme::DesertDay | BackgroundTheme::DesertNight)
    }
}

/// The four parallax layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Back,
    Middle,
    Front,
    Ground,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Back, Layer::Middle, Layer::Front, Layer::Ground];
}

/// Playable characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dino {
    Green,
    Blue,
    Yellow,
    Red,
}

impl Dino {
    pub const ALL: [Dino; 4] = [Dino::Green, Dino::Blue, Dino::Yellow, Dino::Red];

    /// Frames in this character's run sheet.
    pub fn run_frame_count(self) -> u32 {
        match self {
            Dino::Green | Dino::Blue => 6,
            Dino::Yellow | Dino::Red => 8,
        }
    }

    fn tint(self) -> Tint {
        match self {
            Dino::Green => Tint::rgb(80, 200, 90),
            Dino::Blue => Tint::rgb(70, 130, 230),
            Dino::Yellow => Tint::rgb(240, 210, 60),
            Dino::Red => Tint::rgb(220, 70, 60),
        }
    }
}

/// Ground-level obstacle art.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroundObstacle {
    SmallCactus,
    BigCactus,
    Skulls,
    Skulls2,
    DesertRock,
    BigDesertRock,
    NightDesertRock,
    BigNightDesertRock,
    ForestRock,
    BigForestRock,
    SmallTree,
    BigTree,
    Log,
    Spikes,
    NightSmallTree,
    NightBigTree,
    NightLog,
    NightSpikes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureId {
    MenuBackground,
    RegistrationBackground,
    ShopBackground,
    LeaderboardFrame,
    Banner,
    Button,
    HeartIcon,
    LifeLostIcon,
    Numbers,
    Dust,
    Bat,
    Pterodactyl,
    DinoIdle(Dino),
    DinoRun(Dino),
    Obstacle(GroundObstacle),
    Background(BackgroundTheme, Layer),
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// How a host should paint a texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Look {
    /// Glyphs cycled by animation frame (terminal hosts) or by column.
    pub glyphs: &'static str,
    pub color: Tint,
    /// Fraction of the texture height, from the top, that is transparent.
    /// Lets scenery layers stack without hiding each other.
    pub fill_from: f32,
}

impl Look {
    pub const fn new(glyphs: &'static str, color: Tint) -> Self {
        Self {
            glyphs,
            color,
            fill_from: 0.0,
        }
    }

    pub const fn layered(glyphs: &'static str, color: Tint, fill_from: f32) -> Self {
        Self {
            glyphs,
            color,
            fill_from,
        }
    }

    /// Glyph for frame (or column) `index`.
    pub fn glyph(&self, index: usize) -> char {
        let count = self.glyphs.chars().count();
        if count == 0 {
            return ' ';
        }
        self.glyphs.chars().nth(index % count).unwrap_or(' ')
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
    pub look: Look,
}

impl Texture {
    pub const fn new(id: TextureId, width: u32, height: u32, look: Look) -> Self {
        Self {
            id,
            width,
            height,
            look,
        }
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Resources {
    textures: HashMap<TextureId, Texture>,
    missing: Texture,
}

impl Default for Resources {
    fn default() -> Self {
        Self::load()
    }
}

impl Resources {
    /// A table with nothing in it. Every lookup yields the zero-sized
    /// placeholder.
    pub fn empty() -> Self {
        Self {
            textures: HashMap::new(),
            missing: Texture::new(TextureId::Numbers, 0, 0, Look::new("", Tint::WHITE)),
        }
    }

    /// The full game texture set.
    pub fn load() -> Self {
        let mut res = Self::empty();

        let paper = Tint::rgb(222, 203, 164);
        res.insert(Texture::new(TextureId::MenuBackground, 640, 360, Look::new("░", paper)));
        res.insert(Texture::new(TextureId::RegistrationBackground, 640, 360, Look::new("░", paper)));
        res.insert(Texture::new(TextureId::ShopBackground, 640, 360, Look::new("░", Tint::rgb(190, 220, 190))));
        res.insert(Texture::new(TextureId::LeaderboardFrame, 160, 200, Look::new("▒", Tint::rgb(160, 110, 60))));
        res.insert(Texture::new(TextureId::Banner, 200, 40, Look::new("▓", Tint::rgb(200, 150, 70))));
        res.insert(Texture::new(TextureId::Button, 96, 32, Look::new("█", Tint::rgb(245, 235, 210))));
        res.insert(Texture::new(TextureId::HeartIcon, 16, 16, Look::new("♥", Tint::RED)));
        res.insert(Texture::new(TextureId::LifeLostIcon, 16, 16, Look::new("♡", Tint::GRAY)));
        res.insert(Texture::new(TextureId::Numbers, 80, 12, Look::new("0123456789", Tint::WHITE)));

        res.insert(Texture::new(TextureId::Dust, 5 * 16, 16, Look::new("∴∵∴·.", Tint::rgb(200, 180, 140))));
        res.insert(Texture::new(TextureId::Bat, 4 * 32, 32, Look::new("VvWv", Tint::rgb(150, 90, 200))));
        res.insert(Texture::new(TextureId::Pterodactyl, 8 * 32, 32, Look::new("^^><vv<>", Tint::rgb(200, 120, 80))));

        for dino in Dino::ALL {
            res.insert(Texture::new(TextureId::DinoIdle(dino), 4 * 24, 24, Look::new("██▓█", dino.tint())));
            res.insert(Texture::new(
                TextureId::DinoRun(dino),
                dino.run_frame_count() * 24,
                24,
                Look::new("█▓█▓█▓█▓", dino.tint()),
            ));
        }

        for (kind, width, height, look) in ground_obstacle_art() {
            res.insert(Texture::new(TextureId::Obstacle(kind), width, height, look));
        }

        for theme in BackgroundTheme::ALL {
            for layer in Layer::ALL {
                res.insert(Texture::new(
                    TextureId::Background(theme, layer),
                    576,
                    324,
                    layer_look(theme, layer),
                ));
            }
        }

        log::debug!("loaded {} textures", res.textures.len());
        res
    }

    pub fn insert(&mut self, texture: Texture) {
        self.textures.insert(texture.id, texture);
    }

    pub fn remove(&mut self, id: TextureId) -> Option<Texture> {
        self.textures.remove(&id)
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(&id)
    }

    /// Look up a texture, degrading to a zero-sized placeholder when the
    /// table has no entry for `id`.
    pub fn texture(&self, id: TextureId) -> &Texture {
        match self.textures.get(&id) {
            Some(tex) => tex,
            None => {
                log::warn!("texture {:?} is not loaded", id);
                &self.missing
            }
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

fn ground_obstacle_art() -> [(GroundObstacle, u32, u32, Look); 18] {
    use GroundObstacle::*;

    let cactus = Tint::rgb(60, 160, 70);
    let bone = Tint::rgb(235, 230, 215);
    let sand_rock = Tint::rgb(170, 130, 90);
    let night_rock = Tint::rgb(90, 80, 110);
    let moss_rock = Tint::rgb(110, 120, 100);
    let bark = Tint::rgb(120, 80, 40);
    let leaf = Tint::rgb(40, 130, 50);
    let night_leaf = Tint::rgb(30, 70, 60);
    let steel = Tint::rgb(180, 180, 190);

    [
        (SmallCactus, 16, 24, Look::new("║", cactus)),
        (BigCactus, 24, 32, Look::new("╬", cactus)),
        (Skulls, 24, 12, Look::new("☠", bone)),
        (Skulls2, 20, 12, Look::new("☠", bone)),
        (DesertRock, 20, 14, Look::new("▄", sand_rock)),
        (BigDesertRock, 28, 20, Look::new("█", sand_rock)),
        (NightDesertRock, 20, 14, Look::new("▄", night_rock)),
        (BigNightDesertRock, 28, 20, Look::new("█", night_rock)),
        (ForestRock, 20, 14, Look::new("▄", moss_rock)),
        (BigForestRock, 28, 20, Look::new("█", moss_rock)),
        (SmallTree, 20, 32, Look::new("♣", leaf)),
        (BigTree, 28, 44, Look::new("♠", leaf)),
        (Log, 32, 12, Look::new("═", bark)),
        (Spikes, 24, 10, Look::new("▲", steel)),
        (NightSmallTree, 20, 32, Look::new("♣", night_leaf)),
        (NightBigTree, 28, 44, Look::new("♠", night_leaf)),
        (NightLog, 32, 12, Look::new("═", night_rock)),
        (NightSpikes, 24, 10, Look::new("▲", night_rock)),
    ]
}

fn layer_look(theme: BackgroundTheme, layer: Layer) -> Look {
    let night = theme.is_night();
    let desert = theme.is_desert();
    match layer {
        Layer::Back => {
            let sky = if night {
                Tint::rgb(20, 24, 60)
            } else if desert {
                Tint::rgb(250, 200, 140)
            } else {
                Tint::rgb(140, 200, 240)
            };
            Look::new("█", sky)
        }
        Layer::Middle => {
            let hills = match (desert, night) {
                (true, false) => Tint::rgb(215, 160, 100),
                (true, true) => Tint::rgb(70, 60, 90),
                (false, false) => Tint::rgb(90, 150, 110),
                (false, true) => Tint::rgb(30, 60, 70),
            };
            Look::layered("▲▴", hills, 0.45)
        }
        Layer::Front => {
            let (glyphs, color) = match (desert, night) {
                (true, false) => ("▓▒", Tint::rgb(190, 130, 80)),
                (true, true) => ("▓▒", Tint::rgb(50, 45, 70)),
                (false, false) => ("♣♠", Tint::rgb(50, 110, 60)),
                (false, true) => ("♣♠", Tint::rgb(20, 50, 45)),
            };
            Look::layered(glyphs, color, 0.65)
        }
        Layer::Ground => {
            let color = match (desert, night) {
                (true, false) => Tint::rgb(230, 190, 120),
                (true, true) => Tint::rgb(100, 90, 110),
                (false, false) => Tint::rgb(110, 80, 50),
                (false, true) => Tint::rgb(60, 45, 40),
            };
            Look::layered("▀▄", color, 0.9)
        }
    }
}
