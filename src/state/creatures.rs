// Sea creature simulation behind the ocean canvas.
// Pure state; drawing lives in `crate::render`.
use std::f64::consts::PI;

use crate::config::OceanConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatureKind {
    Fish,
    Dolphin,
    Seahorse,
    Jellyfish,
    /// Rests on the sea floor.
    Starfish,
    Treasure,
    Seaweed,
}

impl CreatureKind {
    /// Kinds that turn to face their direction of travel.
    pub fn faces_velocity(self) -> bool {
        matches!(self, CreatureKind::Fish | CreatureKind::Dolphin)
    }

    /// Kinds that bob around on top of their velocity.
    pub fn drifts(self) -> bool {
        matches!(self, CreatureKind::Jellyfish | CreatureKind::Seahorse)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, alpha)
    }
}

const FISH_COLORS: [Hsl; 8] = [
    Hsl::new(30.0, 80.0, 60.0),
    Hsl::new(260.0, 70.0, 65.0),
    Hsl::new(340.0, 85.0, 55.0),
    Hsl::new(120.0, 60.0, 50.0),
    Hsl::new(45.0, 90.0, 70.0),
    Hsl::new(200.0, 80.0, 60.0),
    Hsl::new(15.0, 85.0, 65.0),
    Hsl::new(280.0, 70.0, 60.0),
];
const DOLPHIN_COLOR: Hsl = Hsl::new(200.0, 60.0, 70.0);
const SEAHORSE_COLORS: [Hsl; 3] = [
    Hsl::new(280.0, 70.0, 60.0),
    Hsl::new(340.0, 80.0, 65.0),
    Hsl::new(45.0, 80.0, 60.0),
];
const JELLYFISH_COLORS: [Hsl; 3] = [
    Hsl::new(300.0, 70.0, 70.0),
    Hsl::new(200.0, 80.0, 70.0),
    Hsl::new(60.0, 70.0, 75.0),
];
const STARFISH_COLORS: [Hsl; 3] = [
    Hsl::new(30.0, 80.0, 60.0),
    Hsl::new(340.0, 85.0, 65.0),
    Hsl::new(260.0, 70.0, 70.0),
];
const TREASURE_COLOR: Hsl = Hsl::new(45.0, 90.0, 70.0);
const SEAWEED_COLOR: Hsl = Hsl::new(120.0, 60.0, 40.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    pub kind: CreatureKind,
    pub x: f64,
    pub y: f64,
    /// Pixels per frame.
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: Hsl,
    /// Heading in radians.
    pub angle: f64,
    /// Offset into the oscillation cycles so creatures do not move in lockstep.
    pub phase: f64,
    /// Sway rate for seahorses and seaweed.
    pub wiggle: f64,
    /// Fish only: draw body stripes.
    pub striped: bool,
}

impl Creature {
    /// Advances one frame: integrate, wrap at the padded bounds, then apply
    /// heading and drift for the kinds that have them.
    pub fn step(&mut self, width: f64, height: f64, now_ms: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x > width + self.size {
            self.x = -self.size;
        }
        if self.x < -self.size {
            self.x = width + self.size;
        }
        if self.y > height + self.size {
            self.y = -self.size;
        }
        if self.y < -self.size {
            self.y = height + self.size;
        }

        if self.kind.faces_velocity() {
            self.angle = self.vy.atan2(self.vx);
        }
        if self.kind.drifts() {
            self.y += (now_ms * 0.002 + self.phase).sin() * 0.5;
            self.x += (now_ms * 0.001 + self.phase).cos() * 0.3;
        }
    }
}

fn pick<T: Copy>(items: &[T], r: f64) -> T {
    let i = ((r * items.len() as f64).floor() as usize).min(items.len() - 1);
    items[i]
}

/// The full population drawn by one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct School {
    pub width: f64,
    pub height: f64,
    creatures: Vec<Creature>,
}

impl School {
    /// Spawns the configured population. `rand` yields values in `[0, 1)`.
    pub fn spawn(cfg: &OceanConfig, mut rand: impl FnMut() -> f64) -> Self {
        let (w, h) = (cfg.width, cfg.height);
        let mut creatures = Vec::with_capacity(cfg.population());
        let base = |kind: CreatureKind, rand: &mut dyn FnMut() -> f64| Creature {
            kind,
            x: rand() * w,
            y: rand() * h,
            vx: 0.0,
            vy: 0.0,
            size: 0.0,
            color: SEAWEED_COLOR,
            angle: 0.0,
            phase: rand() * PI * 2.0,
            wiggle: 0.0,
            striped: false,
        };

        for _ in 0..cfg.fish {
            let mut c = base(CreatureKind::Fish, &mut rand);
            c.vx = (rand() - 0.5) * 1.5;
            c.vy = (rand() - 0.5) * 0.8;
            c.size = rand() * 12.0 + 6.0;
            c.color = pick(&FISH_COLORS, rand());
            c.angle = rand() * PI * 2.0;
            c.striped = rand() > 0.6;
            creatures.push(c);
        }
        for _ in 0..cfg.dolphins {
            let mut c = base(CreatureKind::Dolphin, &mut rand);
            c.y = rand() * h * 0.7;
            c.vx = (rand() - 0.5) * 2.0;
            c.vy = (rand() - 0.5) * 1.0;
            c.size = rand() * 15.0 + 20.0;
            c.color = DOLPHIN_COLOR;
            c.angle = rand() * PI * 2.0;
            creatures.push(c);
        }
        for _ in 0..cfg.seahorses {
            let mut c = base(CreatureKind::Seahorse, &mut rand);
            c.vy = (rand() - 0.5) * 0.5;
            c.size = rand() * 8.0 + 12.0;
            c.color = pick(&SEAHORSE_COLORS, rand());
            c.wiggle = rand() * 0.02 + 0.01;
            creatures.push(c);
        }
        for _ in 0..cfg.jellyfish {
            let mut c = base(CreatureKind::Jellyfish, &mut rand);
            c.y = rand() * h * 0.8;
            c.vx = (rand() - 0.5) * 0.5;
            c.vy = (rand() - 0.5) * 0.3;
            c.size = rand() * 10.0 + 8.0;
            c.color = pick(&JELLYFISH_COLORS, rand());
            creatures.push(c);
        }
        for _ in 0..cfg.starfish {
            let mut c = base(CreatureKind::Starfish, &mut rand);
            c.y = h - rand() * 60.0 - 20.0;
            c.size = rand() * 8.0 + 10.0;
            c.color = pick(&STARFISH_COLORS, rand());
            c.angle = rand() * PI * 2.0;
            creatures.push(c);
        }
        for _ in 0..cfg.treasure {
            let mut c = base(CreatureKind::Treasure, &mut rand);
            c.y = h - rand() * 40.0 - 30.0;
            c.size = rand() * 8.0 + 12.0;
            c.color = TREASURE_COLOR;
            creatures.push(c);
        }
        for _ in 0..cfg.seaweed {
            let mut c = base(CreatureKind::Seaweed, &mut rand);
            c.y = h - rand() * 80.0;
            c.size = rand() * 15.0 + 20.0;
            c.color = SEAWEED_COLOR;
            c.wiggle = rand() * 0.02 + 0.01;
            creatures.push(c);
        }

        Self {
            width: w,
            height: h,
            creatures,
        }
    }

    pub fn step(&mut self, now_ms: f64) {
        let (w, h) = (self.width, self.height);
        for c in &mut self.creatures {
            c.step(w, h, now_ms);
        }
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    fn cycling(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    fn fish(x: f64, y: f64, vx: f64, vy: f64) -> Creature {
        Creature {
            kind: CreatureKind::Fish,
            x,
            y,
            vx,
            vy,
            size: 10.0,
            color: FISH_COLORS[0],
            angle: 0.0,
            phase: 0.0,
            wiggle: 0.0,
            striped: false,
        }
    }

    #[test]
    fn spawn_honours_population() {
        let cfg = OceanConfig::default();
        let school = School::spawn(&cfg, cycling(vec![0.1, 0.5, 0.9, 0.3]));
        assert_eq!(school.creatures().len(), 53);
        let count = |k| school.creatures().iter().filter(|c| c.kind == k).count();
        assert_eq!(count(CreatureKind::Fish), 25);
        assert_eq!(count(CreatureKind::Dolphin), 3);
        assert_eq!(count(CreatureKind::Seahorse), 4);
        assert_eq!(count(CreatureKind::Jellyfish), 5);
        assert_eq!(count(CreatureKind::Starfish), 6);
        assert_eq!(count(CreatureKind::Treasure), 2);
        assert_eq!(count(CreatureKind::Seaweed), 8);
    }

    #[test]
    fn spawn_stays_in_parameter_ranges() {
        let cfg = OceanConfig::default();
        for r in [0.0, 0.42, 0.999] {
            let school = School::spawn(&cfg, fixed(r));
            for c in school.creatures() {
                assert!(c.x >= 0.0 && c.x <= cfg.width);
                match c.kind {
                    CreatureKind::Fish => {
                        assert!((6.0..18.0).contains(&c.size));
                        assert!(c.vx.abs() <= 0.75 && c.vy.abs() <= 0.4);
                    }
                    CreatureKind::Starfish | CreatureKind::Treasure | CreatureKind::Seaweed => {
                        assert_eq!((c.vx, c.vy), (0.0, 0.0));
                        assert!(c.y <= cfg.height);
                    }
                    CreatureKind::Seahorse => {
                        assert_eq!(c.vx, 0.0);
                        assert!(c.wiggle >= 0.01 && c.wiggle < 0.03);
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn wraps_past_each_edge() {
        let mut right = fish(805.0, 100.0, 6.0, 0.0);
        right.step(800.0, 600.0, 0.0);
        assert_eq!(right.x, -10.0);

        let mut left = fish(-8.0, 100.0, -3.0, 0.0);
        left.step(800.0, 600.0, 0.0);
        assert_eq!(left.x, 810.0);

        let mut bottom = fish(50.0, 609.5, 0.0, 1.0);
        bottom.step(800.0, 600.0, 0.0);
        assert_eq!(bottom.y, -10.0);

        let mut top = fish(50.0, -9.5, 0.0, -1.0);
        top.step(800.0, 600.0, 0.0);
        assert_eq!(top.y, 610.0);
    }

    #[test]
    fn fish_face_their_velocity() {
        let mut f = fish(100.0, 100.0, 0.0, 1.0);
        f.step(800.0, 600.0, 0.0);
        assert!((f.angle - PI / 2.0).abs() < 1e-9);
        assert_eq!((f.x, f.y), (100.0, 101.0));
    }

    #[test]
    fn jellyfish_drift_with_time() {
        let mut j = fish(100.0, 100.0, 0.0, 0.0);
        j.kind = CreatureKind::Jellyfish;
        j.step(800.0, 600.0, 0.0);
        // sin(0) = 0, cos(0) = 1
        assert!((j.y - 100.0).abs() < 1e-9);
        assert!((j.x - 100.3).abs() < 1e-9);
        assert_eq!(j.angle, 0.0);
    }

    #[test]
    fn anchored_kinds_do_not_move() {
        let cfg = OceanConfig {
            fish: 0,
            dolphins: 0,
            seahorses: 0,
            jellyfish: 0,
            ..Default::default()
        };
        let mut school = School::spawn(&cfg, cycling(vec![0.2, 0.7]));
        let before = school.clone();
        for t in 0..120 {
            school.step(t as f64 * 16.0);
        }
        assert_eq!(school, before);
    }

    #[test]
    fn hsl_css_strings() {
        let c = Hsl::new(45.0, 90.0, 70.0);
        assert_eq!(c.css(), "hsl(45, 90%, 70%)");
        assert_eq!(c.css_alpha(0.4), "hsla(45, 90%, 70%, 0.4)");
    }
}
