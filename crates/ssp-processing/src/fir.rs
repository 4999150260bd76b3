//! FIR decimation filters and the per-session filter chain

use std::sync::Arc;

use ssp_core::{SspError, SspResult};

use crate::coefficients::{DEC10_HALF, ULP379, VLP389};

/// One FIR decimation filter definition. Instances share the tap list
/// through the `Arc`; everything else is plain metadata.
#[derive(Debug, Clone)]
pub struct FirFilterDef {
    /// Chain-unique filter id
    pub id: u8,
    /// Short name, e.g. "DEC10"
    pub name: String,
    /// Input samples consumed per output sample
    pub decimation: u32,
    /// Scalar applied to every output
    pub gain: f64,
    /// Group delay in input samples
    pub delay: f64,
    /// Full tap list
    pub coefficients: Arc<[f64]>,
}

impl FirFilterDef {
    /// Create a validated client definition. Delay defaults to the
    /// symmetric-filter value `(taps - 1) / 2`.
    pub fn new(
        id: u8,
        name: &str,
        decimation: u32,
        gain: f64,
        coefficients: Vec<f64>,
    ) -> SspResult<Self> {
        if coefficients.is_empty() {
            return Err(SspError::InvalidFilterConfig {
                message: format!("filter {} has no coefficients", name),
            });
        }
        if decimation < 1 {
            return Err(SspError::InvalidFilterConfig {
                message: format!("filter {} decimation must be at least 1", name),
            });
        }
        if decimation as usize > coefficients.len() {
            return Err(SspError::InvalidFilterConfig {
                message: format!(
                    "filter {} decimation {} exceeds tap count {}",
                    name,
                    decimation,
                    coefficients.len()
                ),
            });
        }

        let delay = (coefficients.len() - 1) as f64 / 2.0;
        Ok(FirFilterDef {
            id,
            name: name.to_string(),
            decimation,
            gain,
            delay,
            coefficients: coefficients.into(),
        })
    }

    /// Number of taps
    pub fn tap_count(&self) -> usize {
        self.coefficients.len()
    }
}

/// Ordered FIR definitions for one session: the three standard
/// decimators followed by any client additions.
#[derive(Debug, Clone)]
pub struct FilterChain {
    filters: Vec<FirFilterDef>,
}

impl FilterChain {
    /// The standard chain. All three decimate by ten at unit gain:
    ///
    /// | id | name   | taps | delay |
    /// |----|--------|------|-------|
    /// | 0  | DEC10  | 400  | 199.5 |
    /// | 1  | VLP389 | 389  | 194.0 |
    /// | 2  | ULP379 | 379  | 189.0 |
    ///
    /// DEC10 is stored as a half table and mirrored here; the other two
    /// tables are already symmetric.
    pub fn built_in() -> Self {
        let mut dec10 = vec![0.0; DEC10_HALF.len() * 2];
        let full = dec10.len();
        for (i, &c) in DEC10_HALF.iter().enumerate() {
            dec10[i] = c;
            dec10[full - 1 - i] = c;
        }

        let filters = vec![
            FirFilterDef {
                id: 0,
                name: "DEC10".to_string(),
                decimation: 10,
                gain: 1.0,
                delay: (full - 1) as f64 / 2.0,
                coefficients: dec10.into(),
            },
            FirFilterDef {
                id: 1,
                name: "VLP389".to_string(),
                decimation: 10,
                gain: 1.0,
                delay: 194.0,
                coefficients: Arc::from(&VLP389[..]),
            },
            FirFilterDef {
                id: 2,
                name: "ULP379".to_string(),
                decimation: 10,
                gain: 1.0,
                delay: 189.0,
                coefficients: Arc::from(&ULP379[..]),
            },
        ];

        FilterChain { filters }
    }

    /// Append client definitions behind the standard set, preserving
    /// their order. The chain keeps its own copies; the caller's list
    /// is left untouched.
    pub fn append(&mut self, defs: &[FirFilterDef]) {
        self.filters.extend(defs.iter().cloned());
    }

    /// Look up a definition by id, first match wins
    pub fn find(&self, id: u8) -> SspResult<&FirFilterDef> {
        self.filters
            .iter()
            .find(|f| f.id == id)
            .ok_or(SspError::UnknownFirFilter { id })
    }

    /// Number of definitions in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Definitions in chain order
    pub fn iter(&self) -> impl Iterator<Item = &FirFilterDef> {
        self.filters.iter()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Per-channel convolve-and-decimate state.
///
/// The window is an index-based ring buffer. A new instance starts in
/// warm-up: `taps - 1` zeros are already credited to the window, so the
/// first push completes it and produces an output immediately.
#[derive(Debug, Clone)]
pub struct FirFilter {
    coefficients: Arc<[f64]>,
    decimation: usize,
    gain: f64,
    buffer: Vec<f64>,
    /// Next write slot
    head: usize,
    /// Samples currently credited to the window
    stored: usize,
}

impl FirFilter {
    /// Instantiate in warm-up state
    pub fn new(def: &FirFilterDef) -> Self {
        let taps = def.coefficients.len();
        FirFilter {
            coefficients: Arc::clone(&def.coefficients),
            decimation: def.decimation as usize,
            gain: def.gain,
            buffer: vec![0.0; taps],
            head: 0,
            stored: taps - 1,
        }
    }

    /// Push one input sample. Returns the filtered, gain-scaled output
    /// when the decimation window completes, otherwise `None`.
    ///
    /// Coefficient 0 pairs with the most recently pushed sample. After
    /// an output the oldest `decimation` samples leave the window, so
    /// exactly `decimation` further pushes are needed for the next one.
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let taps = self.buffer.len();
        self.buffer[self.head] = sample;
        self.head = (self.head + 1) % taps;
        self.stored += 1;

        if self.stored < taps {
            return None;
        }

        let mut accum = 0.0;
        let mut idx = (self.head + taps - 1) % taps;
        for &c in self.coefficients.iter() {
            accum += self.buffer[idx] * c;
            idx = if idx == 0 { taps - 1 } else { idx - 1 };
        }

        self.stored -= self.decimation;
        Some(accum * self.gain)
    }

    /// Return to the freshly created warm-up state
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.head = 0;
        self.stored = self.buffer.len() - 1;
    }

    /// Number of taps
    pub fn tap_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Input-to-output decimation ratio
    pub fn decimation(&self) -> usize {
        self.decimation
    }
}
