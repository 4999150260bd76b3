//! Butterworth section design and recursive cascade evaluation

use serde::{Deserialize, Serialize};
use ssp_core::{SspError, SspResult};

/// Largest designable pole count (four quadratic factors)
pub const MAX_POLES: usize = 8;

/// Cascade outputs below this magnitude are snapped away from the
/// denormal range when the guard is enabled
pub const DENORMAL_FLOOR: f64 = 1.0e-20;

/// Frequency response class of a designed section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IirBand {
    Lowpass,
    Highpass,
}

impl std::fmt::Display for IirBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IirBand::Lowpass => write!(f, "low-pass"),
            IirBand::Highpass => write!(f, "high-pass"),
        }
    }
}

/// Request for one Butterworth section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Filter order, 1 to 8
    pub poles: usize,
    /// Low-pass or high-pass
    pub band: IirBand,
    /// Cutoff frequency as a fraction of Nyquist, strictly inside (0, 1)
    pub cutoff_ratio: f64,
}

impl SectionSpec {
    pub fn lowpass(poles: usize, cutoff_ratio: f64) -> Self {
        SectionSpec { poles, band: IirBand::Lowpass, cutoff_ratio }
    }

    pub fn highpass(poles: usize, cutoff_ratio: f64) -> Self {
        SectionSpec { poles, band: IirBand::Highpass, cutoff_ratio }
    }

    /// Design this section's coefficients
    pub fn design(&self) -> SspResult<SectionCoefficients> {
        design_section(self.poles, self.band, self.cutoff_ratio)
    }
}

/// Designed coefficients for one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCoefficients {
    /// Filter order
    pub poles: usize,
    /// Feed-forward terms, `poles + 1` entries
    pub a: Vec<f64>,
    /// Feedback terms, `poles + 1` entries. Index 0 is stored as 1 and
    /// skipped by the recursion; the rest are pre-negated so the
    /// recursion adds them.
    pub b: Vec<f64>,
}

/// `n! / (k! (n-k)!)`, zero when `k > n`
fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let fact = |m: usize| (1..=m).fold(1.0, |acc, j| acc * j as f64);
    fact(n) / (fact(k) * fact(n - k))
}

/// Synthesize one Butterworth section via the bilinear transform.
///
/// Pole pairs are placed on the analog unit circle at
/// `pi/2 + pi/(2n) + pi*i/n`, mapped through the frequency pre-warp
/// `warp = tan(pi * cutoff_ratio / 2)`, and normalized so the passband
/// reference gain (DC for low-pass, Nyquist for high-pass) is exactly
/// one. An odd order contributes one first-order real-pole factor.
pub fn design_section(
    poles: usize,
    band: IirBand,
    cutoff_ratio: f64,
) -> SspResult<SectionCoefficients> {
    if poles < 1 || poles > MAX_POLES {
        return Err(SspError::InvalidPoleCount { poles, max: MAX_POLES });
    }
    if !(cutoff_ratio > 0.0 && cutoff_ratio < 1.0) {
        return Err(SspError::InvalidCutoffRatio { ratio: cutoff_ratio });
    }

    let n_conj = poles / 2;
    let odd = poles % 2 == 1;

    let nu = std::f64::consts::PI * cutoff_ratio / 2.0;
    let warp = libm::sin(nu) / libm::cos(nu);
    let warp2 = warp * warp;

    // Up to four factor polynomials [1, c1, c2] and the running DC
    // normalizer they accumulate
    let mut factors = [[1.0, 0.0, 0.0]; 4];
    let mut hzero = 1.0;

    for i in 0..n_conj {
        let angle = std::f64::consts::PI / 2.0
            + std::f64::consts::PI / (2.0 * poles as f64)
            + std::f64::consts::PI * i as f64 / poles as f64;
        let d = -2.0 * libm::cos(angle);
        let den = 1.0 + d * warp + warp2;
        hzero *= warp2 / den;
        factors[i][1] = 2.0 * (warp2 - 1.0) / den;
        factors[i][2] = (1.0 - d * warp + warp2) / den;
    }
    if odd {
        let den = 1.0 + warp;
        hzero *= warp / den;
        factors[(poles + 1) / 2 - 1][1] = (warp - 1.0) / den;
    }

    // Two pairwise convolutions, then one more below for the full
    // denominator polynomial
    let mut p1 = [0.0; 5];
    let mut p2 = [0.0; 5];
    for i in 0..3 {
        for j in 0..3 {
            p1[i + j] += factors[0][i] * factors[1][j];
            p2[i + j] += factors[2][i] * factors[3][j];
        }
    }

    let high = band == IirBand::Highpass;
    let warp_n = libm::pow(warp, poles as f64);
    let mut num = [0.0; 9];
    for (k, term) in num.iter_mut().enumerate() {
        *term = binomial(poles, k) * hzero;
        if high {
            *term /= warp_n;
            if k % 2 == 1 {
                *term = -*term;
            }
        }
    }

    let mut den_poly = [0.0; 9];
    for i in 0..5 {
        for j in 0..5 {
            den_poly[i + j] += p1[i] * p2[j];
        }
    }
    // Negate feedback terms so the recursion adds them; index 0 stays 1
    for term in den_poly.iter_mut().skip(1) {
        *term = -*term;
    }

    Ok(SectionCoefficients {
        poles,
        a: num[..=poles].to_vec(),
        b: den_poly[..=poles].to_vec(),
    })
}

/// A named cascade definition: ordered section specs plus overall gain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IirDefinition {
    /// Session-unique definition id
    pub id: u8,
    /// Short name, e.g. "LP4-01"
    pub name: String,
    /// Overall gain, folded into the first section at instantiation
    pub gain: f64,
    /// Sections in processing order
    pub sections: Vec<SectionSpec>,
}

impl IirDefinition {
    pub fn new(id: u8, name: &str, gain: f64, sections: Vec<SectionSpec>) -> Self {
        IirDefinition {
            id,
            name: name.to_string(),
            gain,
            sections,
        }
    }

    /// Check every section is designable
    pub fn validate(&self) -> SspResult<()> {
        for spec in &self.sections {
            if spec.poles < 1 || spec.poles > MAX_POLES {
                return Err(SspError::InvalidPoleCount {
                    poles: spec.poles,
                    max: MAX_POLES,
                });
            }
            if !(spec.cutoff_ratio > 0.0 && spec.cutoff_ratio < 1.0) {
                return Err(SspError::InvalidCutoffRatio {
                    ratio: spec.cutoff_ratio,
                });
            }
        }
        Ok(())
    }
}

/// One section's coefficients plus its runtime delay lines.
///
/// Histories are small rings sharing one position index; stepping the
/// position back ages every stored value by one sample without moving
/// any of them.
#[derive(Debug, Clone)]
struct SectionState {
    a: Vec<f64>,
    b: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    pos: usize,
}

impl SectionState {
    fn new(coeffs: SectionCoefficients) -> Self {
        let len = coeffs.poles + 1;
        SectionState {
            a: coeffs.a,
            b: coeffs.b,
            x: vec![0.0; len],
            y: vec![0.0; len],
            pos: 0,
        }
    }

    fn process(&mut self, sample: f64) -> f64 {
        let len = self.x.len();
        self.pos = (self.pos + len - 1) % len;
        self.x[self.pos] = sample;

        let mut accum = 0.0;
        for (k, &a) in self.a.iter().enumerate() {
            accum += self.x[(self.pos + k) % len] * a;
        }
        for (k, &b) in self.b.iter().enumerate().skip(1) {
            accum += self.y[(self.pos + k) % len] * b;
        }

        self.y[self.pos] = accum;
        accum
    }

    fn reset(&mut self) {
        self.x.fill(0.0);
        self.y.fill(0.0);
        self.pos = 0;
    }
}

/// Runtime cascade instantiated from a definition. Each section's
/// output feeds the next; histories start zeroed.
#[derive(Debug, Clone)]
pub struct IirCascade {
    definition_id: u8,
    sections: Vec<SectionState>,
    denormal_guard: bool,
}

impl IirCascade {
    /// Instantiate with the denormal guard off
    pub fn new(def: &IirDefinition) -> SspResult<Self> {
        Self::with_options(def, false)
    }

    /// Design every section and fold the definition gain into the
    /// first section's feed-forward terms, once
    pub fn with_options(def: &IirDefinition, denormal_guard: bool) -> SspResult<Self> {
        let mut sections = Vec::with_capacity(def.sections.len());
        for (index, spec) in def.sections.iter().enumerate() {
            let mut coeffs = spec.design()?;
            if index == 0 {
                for term in coeffs.a.iter_mut() {
                    *term *= def.gain;
                }
            }
            sections.push(SectionState::new(coeffs));
        }
        Ok(IirCascade {
            definition_id: def.id,
            sections,
            denormal_guard,
        })
    }

    /// Run one sample through every section in order
    pub fn process(&mut self, sample: f64) -> f64 {
        let mut value = sample;
        for section in self.sections.iter_mut() {
            value = section.process(value);
        }
        if self.denormal_guard && value != 0.0 && value.abs() < DENORMAL_FLOOR {
            value = if value > 0.0 { DENORMAL_FLOOR } else { -DENORMAL_FLOOR };
        }
        value
    }

    /// Id of the definition this cascade was built from
    pub fn definition_id(&self) -> u8 {
        self.definition_id
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Zero all histories
    pub fn reset(&mut self) {
        for section in self.sections.iter_mut() {
            section.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sinusoid_gain(cascade: &mut IirCascade, ratio: f64, samples: usize) -> f64 {
        let mut in_sq = 0.0;
        let mut out_sq = 0.0;
        let settle = samples / 2;
        for n in 0..samples {
            let s = (std::f64::consts::PI * ratio * n as f64).sin();
            let v = cascade.process(s);
            if n >= settle {
                in_sq += s * s;
                out_sq += v * v;
            }
        }
        (out_sq / in_sq).sqrt()
    }

    #[test]
    fn test_design_validation() {
        assert_eq!(
            design_section(0, IirBand::Lowpass, 0.5).unwrap_err(),
            SspError::InvalidPoleCount { poles: 0, max: 8 }
        );
        assert_eq!(
            design_section(9, IirBand::Lowpass, 0.5).unwrap_err(),
            SspError::InvalidPoleCount { poles: 9, max: 8 }
        );
        assert!(design_section(4, IirBand::Lowpass, 0.0).is_err());
        assert!(design_section(4, IirBand::Lowpass, 1.0).is_err());
        assert!(design_section(4, IirBand::Highpass, -0.2).is_err());
    }

    #[test]
    fn test_section_shapes() {
        for poles in 1..=MAX_POLES {
            let c = design_section(poles, IirBand::Lowpass, 0.3).unwrap();
            assert_eq!(c.a.len(), poles + 1);
            assert_eq!(c.b.len(), poles + 1);
            assert_eq!(c.b[0], 1.0);
        }
    }

    #[test]
    fn test_lowpass_settles_to_unity() {
        for poles in 1..=MAX_POLES {
            let def = IirDefinition::new(
                1, "LP", 1.0, vec![SectionSpec::lowpass(poles, 0.3)]);
            let mut cascade = IirCascade::new(&def).unwrap();
            let mut last = 0.0;
            for _ in 0..500 {
                last = cascade.process(1.0);
            }
            assert!(
                (last - 1.0).abs() < 1e-9,
                "poles {} settled to {}",
                poles,
                last
            );
        }
    }

    #[test]
    fn test_butterworth_monotonicity() {
        let def = IirDefinition::new(
            1, "LP4", 1.0, vec![SectionSpec::lowpass(4, 0.25)]);

        let mut gains = Vec::new();
        for &ratio in &[0.1, 0.25, 0.4, 0.6] {
            let mut cascade = IirCascade::new(&def).unwrap();
            gains.push(sinusoid_gain(&mut cascade, ratio, 4000));
        }

        assert!(gains[0] > gains[1]);
        assert!(gains[1] > gains[2]);
        assert!(gains[2] > gains[3]);
        assert!(gains[0] > 0.99, "passband gain {}", gains[0]);
        // Half-power point sits at the design cutoff
        assert!(
            (gains[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 5e-3,
            "cutoff gain {}",
            gains[1]
        );
        assert!(gains[3] < 0.01, "stopband gain {}", gains[3]);
    }

    #[test]
    fn test_highpass_inversion() {
        let low = design_section(4, IirBand::Lowpass, 0.25).unwrap();
        let high = design_section(4, IirBand::Highpass, 0.25).unwrap();

        let warp = (std::f64::consts::PI * 0.25 / 2.0).tan();
        let warp_n = warp.powi(4);
        for k in 0..=4 {
            let rescaled = high.a[k] * warp_n;
            let expected = if k % 2 == 0 { low.a[k] } else { -low.a[k] };
            assert!(
                (rescaled - expected).abs() < 1e-12,
                "term {}: {} vs {}",
                k,
                rescaled,
                expected
            );
        }
    }

    #[test]
    fn test_highpass_rejects_dc() {
        let def = IirDefinition::new(
            1, "HP", 1.0, vec![SectionSpec::highpass(4, 0.25)]);
        let mut cascade = IirCascade::new(&def).unwrap();
        let mut last = 1.0;
        for _ in 0..500 {
            last = cascade.process(1.0);
        }
        assert!(last.abs() < 1e-9, "DC leak {}", last);
    }

    #[test]
    fn test_gain_folds_once() {
        // Two unity-DC sections with overall gain 2 must settle to 2,
        // not 4
        let def = IirDefinition::new(
            1,
            "LP2X2",
            2.0,
            vec![SectionSpec::lowpass(2, 0.3), SectionSpec::lowpass(2, 0.3)],
        );
        let mut cascade = IirCascade::new(&def).unwrap();
        assert_eq!(cascade.section_count(), 2);
        let mut last = 0.0;
        for _ in 0..500 {
            last = cascade.process(1.0);
        }
        assert!((last - 2.0).abs() < 1e-9, "settled to {}", last);
    }

    #[test]
    fn test_denormal_guard() {
        let def = IirDefinition::new(
            1, "LP1", 1.0, vec![SectionSpec::lowpass(1, 0.25)]);

        let mut guarded = IirCascade::with_options(&def, true).unwrap();
        let out = guarded.process(1.0e-30);
        assert_eq!(out, DENORMAL_FLOOR);

        // Exact zero passes through unchanged
        let mut fresh = IirCascade::with_options(&def, true).unwrap();
        assert_eq!(fresh.process(0.0), 0.0);

        // Without the guard the tiny value survives
        let mut unguarded = IirCascade::new(&def).unwrap();
        let out = unguarded.process(1.0e-30);
        assert!(out > 0.0 && out < DENORMAL_FLOOR);
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let def = IirDefinition::new(
            1, "LP3", 1.0, vec![SectionSpec::lowpass(3, 0.2)]);
        let mut used = IirCascade::new(&def).unwrap();
        for n in 0..100 {
            used.process((n as f64 * 0.7).sin());
        }
        used.reset();

        let mut fresh = IirCascade::new(&def).unwrap();
        for n in 0..50 {
            let s = (n as f64 * 0.3).cos();
            assert_eq!(used.process(s), fresh.process(s));
        }
    }
}
