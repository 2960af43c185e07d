//! Noise-driven height evaluation per grid cell

use noise::{Billow, Fbm, MultiFractal, NoiseFn, Perlin, RidgedMulti};
use rand::Rng;

use crate::terrain::config::{NoiseParams, NoiseVariant};

/// Evaluates a terrain height per grid cell from a configured noise variant.
///
/// The noise source is built once up front; `evaluate` is then a pure
/// sampling call for every variant except [`NoiseVariant::Random`], which
/// ignores coordinates and is not reproducible.
pub struct HeightField {
    params: NoiseParams,
    source: NoiseSource,
}

enum NoiseSource {
    Perlin(Perlin),
    Fbm(Fbm<Perlin>),
    Turbulence(Billow<Perlin>),
    Ridge(RidgedMulti<Perlin>),
    Warp(Fbm<Perlin>),
    Random,
}

/// Map a raw noise sample from [-1, 1] to [0, 1].
fn normalized(value: f64) -> f64 {
    (value + 1.0) * 0.5
}

/// Standard fractional Brownian motion over Perlin octaves.
fn fbm(seed: u32, octaves: usize) -> Fbm<Perlin> {
    Fbm::<Perlin>::new(seed)
        .set_octaves(octaves)
        .set_persistence(0.5)
        .set_lacunarity(2.0)
}

impl HeightField {
    /// Build the noise source for `params`.
    ///
    /// The octave count is clamped to at least 1 here, at the configuration
    /// boundary; sampling does not re-validate.
    pub fn new(params: &NoiseParams) -> Self {
        let octaves = params.octaves.max(1) as usize;
        let source = match params.variant {
            NoiseVariant::Perlin => NoiseSource::Perlin(Perlin::new(params.seed)),
            NoiseVariant::Fbm => NoiseSource::Fbm(fbm(params.seed, octaves)),
            NoiseVariant::Warp => NoiseSource::Warp(fbm(params.seed, octaves)),
            NoiseVariant::Turbulence => NoiseSource::Turbulence(
                Billow::<Perlin>::new(params.seed)
                    .set_octaves(octaves)
                    .set_persistence(0.5)
                    .set_lacunarity(2.0),
            ),
            NoiseVariant::Ridge => NoiseSource::Ridge(
                RidgedMulti::<Perlin>::new(params.seed)
                    .set_octaves(octaves)
                    .set_lacunarity(2.0),
            ),
            NoiseVariant::Random => NoiseSource::Random,
        };

        Self {
            params: params.clone(),
            source,
        }
    }

    /// Get the parameters this field was built from
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Terrain height for grid cell (x, z), before vertical scaling.
    ///
    /// Grid coordinates map to noise space via `coord * frequency + offset`;
    /// the sampled value is scaled by amplitude and biased by the height
    /// offset. Output is not sanitized: what the noise source returns is
    /// what the mesh gets.
    pub fn evaluate(&self, x: i32, z: i32) -> f32 {
        let nx = x as f64 * self.params.frequency as f64 + self.params.offset as f64;
        let nz = z as f64 * self.params.frequency as f64 + self.params.offset as f64;

        let sample = match &self.source {
            NoiseSource::Perlin(source) => normalized(source.get([nx, nz])),
            NoiseSource::Fbm(source) => normalized(source.get([nx, nz])),
            NoiseSource::Turbulence(source) => normalized(source.get([nx, nz])),
            NoiseSource::Ridge(source) => normalized(source.get([nx, nz])),
            NoiseSource::Warp(source) => {
                // Domain warping: each evaluation offsets the coordinates of
                // the next, always re-anchored at the original point.
                let q = normalized(source.get([nx, nz]));
                let r = normalized(source.get([nx + q, nz + q]));
                normalized(source.get([nx + r, nz + r]))
            }
            NoiseSource::Random => rand::rng().random_range(0.0..1.0),
        };

        sample as f32 * self.params.amplitude + self.params.height_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(variant: NoiseVariant) -> NoiseParams {
        NoiseParams {
            variant,
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic_variants_repeat() {
        for variant in [
            NoiseVariant::Perlin,
            NoiseVariant::Fbm,
            NoiseVariant::Warp,
            NoiseVariant::Turbulence,
            NoiseVariant::Ridge,
        ] {
            let a = HeightField::new(&params(variant));
            let b = HeightField::new(&params(variant));
            for (x, z) in [(0, 0), (17, 3), (-5, 40), (250, 250)] {
                assert_eq!(
                    a.evaluate(x, z),
                    b.evaluate(x, z),
                    "variant {:?} must be deterministic at ({}, {})",
                    variant,
                    x,
                    z
                );
            }
        }
    }

    #[test]
    fn test_perlin_range() {
        let field = HeightField::new(&params(NoiseVariant::Perlin));
        for x in 0..32 {
            for z in 0..32 {
                let h = field.evaluate(x, z);
                assert!((0.0..=1.0).contains(&h), "height {} out of range", h);
            }
        }
    }

    #[test]
    fn test_amplitude_and_height_offset() {
        let base = HeightField::new(&params(NoiseVariant::Perlin));
        let scaled = HeightField::new(&NoiseParams {
            amplitude: 3.0,
            height_offset: 2.0,
            ..params(NoiseVariant::Perlin)
        });

        let h = base.evaluate(7, 11);
        assert!((scaled.evaluate(7, 11) - (h * 3.0 + 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = HeightField::new(&NoiseParams { seed: 1, ..params(NoiseVariant::Fbm) });
        let b = HeightField::new(&NoiseParams { seed: 2, ..params(NoiseVariant::Fbm) });
        assert_ne!(a.evaluate(13, 29), b.evaluate(13, 29));
    }

    #[test]
    fn test_warp_differs_from_fbm() {
        let warp = HeightField::new(&params(NoiseVariant::Warp));
        let fbm = HeightField::new(&params(NoiseVariant::Fbm));
        let differs = (0..16).any(|i| warp.evaluate(i, i + 3) != fbm.evaluate(i, i + 3));
        assert!(differs);
    }

    #[test]
    fn test_octave_clamp() {
        let field = HeightField::new(&NoiseParams {
            octaves: 0,
            ..params(NoiseVariant::Fbm)
        });
        let h = field.evaluate(5, 5);
        assert!(h.is_finite());
    }

    #[test]
    fn test_random_in_range_and_varies() {
        let field = HeightField::new(&params(NoiseVariant::Random));
        let samples: Vec<f32> = (0..64).map(|_| field.evaluate(0, 0)).collect();
        assert!(samples.iter().all(|h| (0.0..=1.0).contains(h)));
        assert!(samples.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
