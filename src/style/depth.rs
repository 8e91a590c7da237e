use crate::{Error, Result};
use once_cell::sync::Lazy;

/// A contiguous depth range (km) mapped to one display color.
///
/// A bucket holds depths in `(lower_bound, upper_bound]`. The first bucket of a
/// [`DepthScale`] also takes everything at or below its `lower_bound`, so a
/// scale always covers the whole real line.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBucket {
    pub lower_bound: f64,
    /// `f64::INFINITY` for the open-ended top bucket.
    pub upper_bound: f64,
    pub color: String,
}

impl DepthBucket {
    pub fn is_open_ended(&self) -> bool {
        self.upper_bound == f64::INFINITY
    }

    /// Legend text for this bucket, e.g. `10–30` or `90+`.
    pub fn label(&self) -> String {
        if self.is_open_ended() {
            format!("{}+", self.lower_bound)
        } else {
            format!("{}\u{2013}{}", self.lower_bound, self.upper_bound)
        }
    }
}

/// Ordered depth-to-color table shared by marker coloring and the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthScale {
    buckets: Vec<DepthBucket>,
}

static DEFAULT_SCALE: Lazy<DepthScale> = Lazy::new(DepthScale::earthquake);

impl DepthScale {
    /// Builds a scale from `(lower_bound, color)` thresholds in ascending order.
    /// Each bucket ends where the next one starts; the last one is open-ended.
    pub fn from_thresholds<S: Into<String>>(
        thresholds: impl IntoIterator<Item = (f64, S)>,
    ) -> Result<Self> {
        let thresholds: Vec<(f64, String)> = thresholds
            .into_iter()
            .map(|(lower, color)| (lower, color.into()))
            .collect();

        let buckets = thresholds
            .iter()
            .enumerate()
            .map(|(i, (lower, color))| DepthBucket {
                lower_bound: *lower,
                upper_bound: thresholds
                    .get(i + 1)
                    .map(|(next, _)| *next)
                    .unwrap_or(f64::INFINITY),
                color: color.clone(),
            })
            .collect();

        let scale = Self { buckets };
        scale.validate()?;
        Ok(scale)
    }

    /// The six-bucket earthquake depth scale, green for shallow through
    /// orange-red for deep events.
    pub fn earthquake() -> Self {
        Self {
            buckets: vec![
                bucket(-10.0, 10.0, "#7CFC00"),
                bucket(10.0, 30.0, "#ADFF2F"),
                bucket(30.0, 50.0, "#FFD700"),
                bucket(50.0, 70.0, "#FFA500"),
                bucket(70.0, 90.0, "#FF8C00"),
                bucket(90.0, f64::INFINITY, "#FF4500"),
            ],
        }
    }

    /// Checks that the table is non-empty, contiguous, strictly increasing
    /// and open-ended at the top.
    pub fn validate(&self) -> Result<()> {
        let Some(last) = self.buckets.last() else {
            return Err(Error::InvalidConfig("depth scale has no buckets".to_string()));
        };

        for bucket in &self.buckets {
            if bucket.lower_bound.is_nan() || !(bucket.upper_bound > bucket.lower_bound) {
                return Err(Error::InvalidConfig(format!(
                    "depth bucket {} is empty or not increasing",
                    bucket.label()
                )));
            }
        }

        for pair in self.buckets.windows(2) {
            if pair[0].upper_bound != pair[1].lower_bound {
                return Err(Error::InvalidConfig(format!(
                    "depth buckets {} and {} are not contiguous",
                    pair[0].label(),
                    pair[1].label()
                )));
            }
        }

        if !last.is_open_ended() {
            return Err(Error::InvalidConfig(format!(
                "top depth bucket {} must be open-ended",
                last.label()
            )));
        }

        Ok(())
    }

    pub fn buckets(&self) -> &[DepthBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Index of the bucket containing `depth_km`.
    ///
    /// Walks down from the deepest bucket and stops at the first strict
    /// `depth_km > lower_bound` match; anything else (NaN included) lands in
    /// the first bucket.
    pub fn bucket_index(&self, depth_km: f64) -> usize {
        self.buckets
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, bucket)| depth_km > bucket.lower_bound)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    pub fn bucket_for(&self, depth_km: f64) -> &DepthBucket {
        &self.buckets[self.bucket_index(depth_km)]
    }

    pub fn color_for(&self, depth_km: f64) -> &str {
        &self.bucket_for(depth_km).color
    }
}

impl Default for DepthScale {
    fn default() -> Self {
        Self::earthquake()
    }
}

fn bucket(lower_bound: f64, upper_bound: f64, color: &str) -> DepthBucket {
    DepthBucket {
        lower_bound,
        upper_bound,
        color: color.to_string(),
    }
}

/// Fill color for an earthquake at `depth_km` on the default scale.
pub fn color_for_depth(depth_km: f64) -> &'static str {
    DEFAULT_SCALE.color_for(depth_km)
}

/// The default scale's buckets, in the order the legend lists them.
pub fn legend_buckets() -> Vec<DepthBucket> {
    DEFAULT_SCALE.buckets().to_vec()
}
