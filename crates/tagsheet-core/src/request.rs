//! Placement requests: `name:size[:range]` specifications resolved against
//! the family registry.

use std::ops::Range;

use serde::Serialize;
use tagsheet_families::{lookup_family, Family, UnknownFamily};

/// Errors produced while turning specification strings into requests.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid family specification '{spec}': expected '<name>:<size>[:<range>]'")]
    MalformedSpec { spec: String },
    #[error(transparent)]
    UnknownFamily(#[from] UnknownFamily),
    #[error("invalid tag size '{value}' in '{spec}': expected a positive number of millimeters")]
    InvalidSize { spec: String, value: String },
    #[error("invalid range '{range}' in '{spec}': only supports N, N-, -M and N-M")]
    InvalidRange { spec: String, range: String },
    #[error("{index} is out of range in {family} (size: {count})")]
    IndexOutOfRange {
        family: &'static str,
        index: usize,
        count: usize,
    },
    #[error("empty range [{begin}, {end}) in {family}")]
    EmptyRange {
        family: &'static str,
        begin: usize,
        end: usize,
    },
}

/// A resolved placement request: which codes of which family, at what size.
///
/// Invariant: `begin < end <= family.len()`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FamilyAndSize {
    #[serde(with = "tagsheet_families::serde_name")]
    family: &'static Family,
    size: f64,
    begin: usize,
    end: usize,
}

impl FamilyAndSize {
    /// Build a request over `[begin, end)`.
    pub fn new(
        family: &'static Family,
        size: f64,
        begin: usize,
        end: usize,
    ) -> Result<Self, ParseError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ParseError::InvalidSize {
                spec: format!("{}:{}", family.name, size),
                value: size.to_string(),
            });
        }
        let count = family.len();
        if begin >= count {
            return Err(ParseError::IndexOutOfRange {
                family: family.name,
                index: begin,
                count,
            });
        }
        if end > count {
            return Err(ParseError::IndexOutOfRange {
                family: family.name,
                index: end,
                count,
            });
        }
        if begin >= end {
            return Err(ParseError::EmptyRange {
                family: family.name,
                begin,
                end,
            });
        }
        Ok(Self {
            family,
            size,
            begin,
            end,
        })
    }

    /// Request every code of the family.
    pub fn full(family: &'static Family, size: f64) -> Result<Self, ParseError> {
        Self::new(family, size, 0, family.len())
    }

    #[inline]
    pub fn family(&self) -> &'static Family {
        self.family
    }

    /// Tag side length in millimeters (outer edge of the black frame).
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of codes in the request; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// Code index for the `k`-th use of this request, wrapping inside the range.
    #[inline]
    pub fn index_at(&self, k: usize) -> usize {
        self.begin + k % self.len()
    }
}

/// Parse one `name:size[:range]` specification.
///
/// Range forms: `N` is `[N, N+1)`, `N-` is `[N, count)`, `-M` is `[0, M)`,
/// and `N-M` is `[N, M)`.
pub fn parse_family_and_size(spec: &str) -> Result<FamilyAndSize, ParseError> {
    let fields: Vec<&str> = spec.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(ParseError::MalformedSpec {
            spec: spec.to_string(),
        });
    }

    let family = lookup_family(fields[0])?;
    let size = parse_size(spec, fields[1])?;

    let Some(range) = fields.get(2) else {
        return FamilyAndSize::full(family, size);
    };
    let (begin, end) = parse_range(spec, range, family)?;
    FamilyAndSize::new(family, size, begin, end)
}

/// Parse every specification, in order. The first error aborts the build.
pub fn build_requests<S: AsRef<str>>(specs: &[S]) -> Result<Vec<FamilyAndSize>, ParseError> {
    specs
        .iter()
        .map(|spec| parse_family_and_size(spec.as_ref()))
        .collect()
}

fn parse_size(spec: &str, value: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidSize {
        spec: spec.to_string(),
        value: value.to_string(),
    };
    let size: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !size.is_finite() || size <= 0.0 {
        return Err(invalid());
    }
    Ok(size)
}

fn parse_range(
    spec: &str,
    range: &str,
    family: &'static Family,
) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidRange {
        spec: spec.to_string(),
        range: range.to_string(),
    };
    let index = |token: &str| token.trim().parse::<usize>().map_err(|_| invalid());
    let count = family.len();

    let bounds: Vec<&str> = range.split('-').collect();
    let (begin, end) = match bounds.as_slice() {
        [single] => {
            let n = index(single)?;
            (n, n.saturating_add(1))
        }
        ["", ""] => return Err(invalid()),
        [lo, ""] => (index(lo)?, count),
        ["", hi] => (0, index(hi)?),
        [lo, hi] => (index(lo)?, index(hi)?),
        _ => return Err(invalid()),
    };

    if begin >= count {
        return Err(ParseError::IndexOutOfRange {
            family: family.name,
            index: begin,
            count,
        });
    }
    Ok((begin, end))
}
