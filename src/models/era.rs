use std::cmp::Ordering;

/// Era tag of the dual-epoch date notation.
///
/// The notation counts years away from a fixed reference point in both
/// directions: `BBY` before it, `ABY` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Bby,
    Aby,
}

impl Era {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bby => "BBY",
            Self::Aby => "ABY",
        }
    }
}

/// Sort order for comparator-driven projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Split an era-date string into its year magnitude and era tag.
///
/// The year is the digit run immediately before a whitespace-separated era
/// tag; anything around those two tokens is ignored.
fn parse_era_year(text: &str) -> Option<(i64, Era)> {
    let mut tokens = text.split_whitespace().peekable();
    while let Some(token) = tokens.next() {
        let era = match tokens.peek() {
            Some(next) if next.starts_with("BBY") => Era::Bby,
            Some(next) if next.starts_with("ABY") => Era::Aby,
            Some(_) => continue,
            None => break,
        };
        let digits = trailing_digits(token);
        if digits.is_empty() {
            continue;
        }
        if let Ok(year) = digits.parse() {
            return Some((year, era));
        }
    }
    None
}

fn trailing_digits(token: &str) -> &str {
    match token.char_indices().rev().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, c)) => &token[index + c.len_utf8()..],
        None => token,
    }
}

/// Parse an era-date into a signed year on a single timeline: BBY years are
/// negative, ABY years positive, so ascending integer order is
/// chronological order.
///
/// Absent, empty, and unrecognized input all parse to `None`. Callers sort
/// those to one end of the order instead of failing.
pub fn parse_epoch_value(date: Option<&str>) -> Option<i64> {
    let (year, era) = parse_era_year(date?)?;
    match era {
        Era::Bby => Some(-year),
        Era::Aby => Some(year),
    }
}

/// Total order over era-dates, suitable for a stable sort.
///
/// Comparable dates order chronologically, flipped by `direction`. Dates
/// that do not parse — missing, empty, or unrecognized — always take the
/// far end: last when ascending, first when descending. Ties are `Equal`,
/// so a stable sort keeps their relative input order.
pub fn compare_epoch(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    let ordering = match (parse_epoch_value(a), parse_epoch_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Display form of a stored era-date: the string itself, or `"N/A"` when
/// there is nothing to show. The stored value is already display-ready, so
/// no conversion happens here.
pub fn format_for_display(date: Option<&str>) -> String {
    match date {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Year label for timeline entries: `"<N> <ERA>"` rebuilt from the parse,
/// `"Unknown"` when the date is absent, or the raw string unchanged when it
/// is present but does not parse.
pub fn extract_display_year(date: Option<&str>) -> String {
    let Some(text) = date.filter(|text| !text.is_empty()) else {
        return "Unknown".to_string();
    };
    match parse_era_year(text) {
        Some((year, era)) => format!("{} {}", year, era.as_str()),
        None => text.to_string(),
    }
}
