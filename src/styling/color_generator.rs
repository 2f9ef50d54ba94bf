use bevy::prelude::*;

/// Deterministic color source for the playground bodies.
#[derive(Resource)]
pub struct ColorGenerator {
    rng: oorandom::Rand32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self {
            rng: oorandom::Rand32::new(123456),
        }
    }
}

impl ColorGenerator {
    pub fn gen_color(&mut self) -> Color {
        Color::srgb(
            self.rng.rand_float(),
            self.rng.rand_float(),
            self.rng.rand_float(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_deterministic() {
        let mut a = ColorGenerator::default();
        let mut b = ColorGenerator::default();
        for _ in 0..16 {
            assert_eq!(a.gen_color(), b.gen_color());
        }
    }
}
