use rand::Rng;

pub const DEFAULT_GLITCH_TARGET: &str = "SYSTEM_BUILDING...";
pub const DEFAULT_GLITCH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$#@%&*";

pub const TICKS_PER_CHAR: usize = 3;

#[derive(Clone, Debug)]
pub struct GlitchConfig {
    pub target: String,
    pub alphabet: String,
    /// Period between reveal cycles.
    pub cycle_ms: u32,
    /// Period between reveal ticks.
    pub tick_ms: u32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_GLITCH_TARGET.to_string(),
            alphabet: DEFAULT_GLITCH_ALPHABET.to_string(),
            cycle_ms: 5000,
            tick_ms: 30,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlitchPhase {
    Idle,
    Revealing,
}

pub struct GlitchText<R> {
    target: Vec<char>,
    alphabet: Vec<char>,
    display: String,
    // progress in thirds of a character; keeps the 1/3 step exact
    ticks: usize,
    phase: GlitchPhase,
    rng: R,
}

impl<R: Rng> GlitchText<R> {
    pub fn new(config: &GlitchConfig, rng: R) -> Self {
        let target: Vec<char> = config.target.chars().collect();
        let mut alphabet: Vec<char> = config.alphabet.chars().collect();
        if alphabet.is_empty() {
            alphabet = DEFAULT_GLITCH_ALPHABET.chars().collect();
        }
        Self {
            display: config.target.clone(),
            target,
            alphabet,
            ticks: 0,
            phase: GlitchPhase::Idle,
            rng,
        }
    }

    pub fn begin_cycle(&mut self) {
        self.ticks = 0;
        self.phase = GlitchPhase::Revealing;
    }

    /// The tick that emits the resolved text also returns to idle.
    pub fn tick(&mut self) -> Option<&str> {
        if self.phase == GlitchPhase::Idle {
            return None;
        }
        self.display.clear();
        for (i, &c) in self.target.iter().enumerate() {
            // locked once floor(revealed_chars) has passed position i
            if (i + 1) * TICKS_PER_CHAR <= self.ticks {
                self.display.push(c);
            } else {
                let k = self.rng.gen_range(0..self.alphabet.len());
                self.display.push(self.alphabet[k]);
            }
        }
        if self.ticks >= self.target.len() * TICKS_PER_CHAR {
            self.phase = GlitchPhase::Idle;
        } else {
            self.ticks += 1;
        }
        Some(&self.display)
    }

    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn phase(&self) -> GlitchPhase {
        self.phase
    }

    pub fn revealed_chars(&self) -> f32 {
        self.ticks as f32 / TICKS_PER_CHAR as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shows_target_before_first_cycle() {
        let mut g = GlitchText::new(&GlitchConfig::default(), StdRng::seed_from_u64(1));
        assert_eq!(g.text(), DEFAULT_GLITCH_TARGET);
        assert_eq!(g.phase(), GlitchPhase::Idle);
        assert!(g.tick().is_none());
    }

    #[test]
    fn empty_target_finishes_on_first_tick() {
        let config = GlitchConfig {
            target: String::new(),
            ..GlitchConfig::default()
        };
        let mut g = GlitchText::new(&config, StdRng::seed_from_u64(1));
        g.begin_cycle();
        assert_eq!(g.tick(), Some(""));
        assert_eq!(g.phase(), GlitchPhase::Idle);
    }
}
