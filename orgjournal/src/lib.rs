//! Read-only query layer over an org-mode journal kept as one file per month.
//! The core stays pure: outline parsing, heading normalization, range resolution
//! and filtering never touch global state. Only `locate` and `extract` read disk.

pub mod core {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::Serialize;

    /* ---------------------------- Value Objects ---------------------------- */

    /// Tag from a trailing `:tag1:tag2:` headline block, kept as authored.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(transparent)]
    pub struct Tag(pub String);

    impl Tag {
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl From<&str> for Tag {
        fn from(s: &str) -> Self {
            Self(s.to_string())
        }
    }

    impl PartialEq<str> for Tag {
        fn eq(&self, other: &str) -> bool {
            self.0 == other
        }
    }

    /* ------------------------------- Entry ------------------------------- */

    /// One dated journal item extracted from a monthly file.
    ///
    /// `date` and `day_of_week` are derived from `timestamp` at construction and
    /// the fields are private, so an entry can never disagree with itself.
    /// Serializes to the flat mapping handed to tool callers.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Entry {
        date: NaiveDate,
        day_of_week: String,
        timestamp: NaiveDateTime,
        title: String,
        body: String,
        tags: Vec<Tag>,
    }

    impl Entry {
        pub fn new(
            timestamp: NaiveDateTime,
            title: impl Into<String>,
            body: impl Into<String>,
            tags: Vec<Tag>,
        ) -> Self {
            Self {
                date: timestamp.date(),
                day_of_week: timestamp.format("%A").to_string(),
                timestamp,
                title: title.into(),
                body: body.into(),
                tags: tags.into_iter().filter(|t| !t.0.is_empty()).collect(),
            }
        }

        pub fn date(&self) -> NaiveDate {
            self.date
        }

        /// English weekday name, e.g. `Saturday`.
        pub fn day_of_week(&self) -> &str {
            &self.day_of_week
        }

        pub fn timestamp(&self) -> NaiveDateTime {
            self.timestamp
        }

        pub fn title(&self) -> &str {
            &self.title
        }

        pub fn body(&self) -> &str {
            &self.body
        }

        pub fn tags(&self) -> &[Tag] {
            &self.tags
        }

        /// Exact, case-sensitive tag membership.
        pub fn has_tag(&self, name: &str) -> bool {
            self.tags.iter().any(|t| t == name)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap()
        }

        #[test]
        fn derived_fields_follow_timestamp() {
            let entry = Entry::new(at(2025, 1, 4, 9, 0), "Project Meeting", "", vec![]);
            assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
            assert_eq!(entry.day_of_week(), "Saturday");
        }

        #[test]
        fn empty_tags_are_dropped() {
            let entry = Entry::new(
                at(2025, 1, 4, 9, 0),
                "t",
                "b",
                vec![Tag::from(""), Tag::from("work")],
            );
            assert_eq!(entry.tags(), &[Tag::from("work")]);
            assert!(entry.has_tag("work"));
            assert!(!entry.has_tag("Work"));
        }

        #[test]
        fn serializes_to_flat_mapping() {
            let entry = Entry::new(
                at(2025, 1, 4, 9, 0),
                "Project Meeting",
                "Discussed new features.",
                vec![Tag::from("meeting"), Tag::from("work")],
            );
            let json = serde_json::to_value(&entry).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "date": "2025-01-04",
                    "day_of_week": "Saturday",
                    "timestamp": "2025-01-04T09:00:00",
                    "title": "Project Meeting",
                    "body": "Discussed new features.",
                    "tags": ["meeting", "work"],
                })
            );
        }
    }
}

pub mod config {
    //! Journal location and default lookback window.

    use directories::BaseDirs;
    use std::{ffi::OsString, path::PathBuf};

    /// Lookback used when a query names no range at all.
    pub const DEFAULT_LAST_DAYS: u32 = 7;
    /// Environment variable overriding the journal directory.
    pub const JOURNAL_DIR_ENV: &str = "ORGJOURNAL_DIR";
    pub const JOURNAL_FILE_PREFIX: &str = "journal-";
    pub const JOURNAL_FILE_EXTENSION: &str = "org";

    /// `<home>/Documents/org/p1-journal`.
    pub fn default_journal_dir() -> PathBuf {
        let home = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_default();
        home.join("Documents").join("org").join("p1-journal")
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct JournalConfig {
        pub journal_dir: PathBuf,
    }

    impl Default for JournalConfig {
        fn default() -> Self {
            Self {
                journal_dir: default_journal_dir(),
            }
        }
    }

    impl JournalConfig {
        pub fn new(journal_dir: impl Into<PathBuf>) -> Self {
            Self {
                journal_dir: journal_dir.into(),
            }
        }

        /// Read `ORGJOURNAL_DIR` once; unset or empty falls back to the default.
        pub fn from_env() -> Self {
            Self::from_override(std::env::var_os(JOURNAL_DIR_ENV))
        }

        fn from_override(value: Option<OsString>) -> Self {
            match value {
                Some(dir) if !dir.is_empty() => Self::new(dir),
                _ => Self::default(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::Path;

        #[test]
        fn default_dir_points_at_p1_journal() {
            let dir = default_journal_dir();
            assert!(dir.ends_with(Path::new("Documents/org/p1-journal")));
            assert_eq!(JournalConfig::default().journal_dir, dir);
        }

        #[test]
        fn override_wins_unless_empty() {
            let cfg = JournalConfig::from_override(Some("/srv/journal".into()));
            assert_eq!(cfg.journal_dir, PathBuf::from("/srv/journal"));

            let cfg = JournalConfig::from_override(Some(OsString::new()));
            assert_eq!(cfg, JournalConfig::default());

            assert_eq!(JournalConfig::from_override(None), JournalConfig::default());
        }
    }
}

pub mod outline {
    //! Minimal org outline built on `nom`.
    //!
    //! Parsing strategy:
    //! - Line-oriented scan; headlines (`*`, `**`, ...) are stack-built into a tree by level.
    //! - Under a headline, leading planning lines and a `:PROPERTIES:` drawer are set aside;
    //!   every other line up to the next headline is the node's body.
    //! - Timestamps attached to a node are collected from the headline, then the body.
    //!
    //! The document root is depth 0, so a `****` headline sits at level 4.

    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use nom::{
        IResult,
        branch::alt,
        bytes::complete::{tag, take_till, take_while_m_n, take_while1},
        character::complete::{char, digit1, one_of, space0, space1},
        combinator::{map_res, opt, recognize},
        error::VerboseError,
        multi::{many0, many1},
        sequence::{preceded, terminated, tuple},
    };

    type PResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

    /* ------------------------------- Model ------------------------------- */

    /// A date stamp, active `<...>` or inactive `[...]`; both count the same.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Timestamp {
        pub date: NaiveDate,
        /// `None` for all-day stamps.
        pub time: Option<NaiveTime>,
    }

    impl Timestamp {
        /// Start instant; all-day stamps start at midnight.
        pub fn start(&self) -> NaiveDateTime {
            self.date.and_time(self.time.unwrap_or_default())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Node {
        pub level: u8,
        /// Headline text after the stars, trimmed. Tags are left in place.
        pub heading: String,
        /// Section text, untrimmed, without planning lines or the property drawer.
        pub body: String,
        pub timestamps: Vec<Timestamp>,
        pub children: Vec<Node>,
    }

    impl Node {
        fn new(level: u8, heading: &str) -> Self {
            Self {
                level,
                heading: heading.to_string(),
                body: String::new(),
                timestamps: vec![],
                children: vec![],
            }
        }

        fn collect_at_level<'a>(&'a self, level: u8, out: &mut Vec<&'a Node>) {
            if self.level == level {
                out.push(self);
            }
            for child in &self.children {
                child.collect_at_level(level, out);
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct Outline {
        /// Text before the first headline.
        pub preamble: String,
        pub nodes: Vec<Node>,
    }

    impl Outline {
        /// Every node at `level`, depth-first in document order.
        pub fn nodes_at_level(&self, level: u8) -> Vec<&Node> {
            let mut out = Vec::new();
            for node in &self.nodes {
                node.collect_at_level(level, &mut out);
            }
            out
        }
    }

    #[derive(Debug, thiserror::Error)]
    pub enum OutlineError {
        #[error("parse error in {label}: {message}")]
        Syntax { label: &'static str, message: String },
        #[error("headline with {0} stars exceeds the deepest supported level")]
        LevelOverflow(usize),
    }

    /* ------------------------ Public entry point ------------------------ */

    pub fn parse_outline(input: &str) -> Result<Outline, OutlineError> {
        let (mut rest, preamble) = take_section(input).map_err(syntax("preamble"))?;

        let mut stack: Vec<Node> = Vec::new();
        let mut roots: Vec<Node> = Vec::new();

        while !rest.is_empty() {
            let (r, (stars, heading)) = parse_headline(rest).map_err(syntax("headline"))?;
            let level = u8::try_from(stars).map_err(|_| OutlineError::LevelOverflow(stars))?;
            let (r, lines) = take_section(r).map_err(syntax("section"))?;
            rest = r;

            let mut node = Node::new(level, heading);
            fill_section(&mut node, &lines);

            close_until(&mut stack, &mut roots, level);
            stack.push(node);
        }
        close_until(&mut stack, &mut roots, 0);

        Ok(Outline {
            preamble: preamble.join("\n"),
            nodes: roots,
        })
    }

    fn syntax(label: &'static str) -> impl Fn(nom::Err<VerboseError<&str>>) -> OutlineError {
        move |e| {
            let message = match e {
                nom::Err::Error(ve) | nom::Err::Failure(ve) => pretty_verbose_error(ve),
                nom::Err::Incomplete(_) => "incomplete input".to_string(),
            };
            OutlineError::Syntax { label, message }
        }
    }

    fn pretty_verbose_error(ve: VerboseError<&str>) -> String {
        ve.errors
            .iter()
            .map(|(frag, kind)| {
                let line = frag.lines().next().unwrap_or_default();
                format!("at {:?} {:?}", line, kind)
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /* ------------------------------- Tree ------------------------------- */

    /// Pop every open node at `level` or deeper, attaching each to its parent.
    fn close_until(stack: &mut Vec<Node>, roots: &mut Vec<Node>, level: u8) {
        while stack.last().is_some_and(|top| top.level >= level) {
            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => parent.children.push(done),
                None => roots.push(done),
            }
        }
    }

    /* ----------------------------- Headlines ----------------------------- */

    fn is_heading_line(s: &str) -> bool {
        let rest = s.trim_start_matches('*');
        rest.len() < s.len() && matches!(rest.chars().next(), Some(' ' | '\t'))
    }

    /// One line, without its `\n` or `\r\n`. A lone `\r` stays part of the line.
    fn till_eol(i: &str) -> PResult<'_, &str> {
        let (i, line) = terminated(take_till(|c| c == '\n'), opt(char('\n')))(i)?;
        Ok((i, line.strip_suffix('\r').unwrap_or(line)))
    }

    fn parse_headline(i: &str) -> PResult<'_, (usize, &str)> {
        let (i, stars) = recognize(many1(char('*')))(i)?;
        let (i, _) = space1(i)?;
        let (i, text) = till_eol(i)?;
        Ok((i, (stars.len(), text.trim())))
    }

    /// Lines up to the next headline (or EOF).
    fn take_section(mut i: &str) -> PResult<'_, Vec<&str>> {
        let mut lines = Vec::new();
        while !i.is_empty() && !is_heading_line(i) {
            let (r, line) = till_eol(i)?;
            lines.push(line);
            i = r;
        }
        Ok((i, lines))
    }

    /* ------------------------------ Sections ------------------------------ */

    fn fill_section(node: &mut Node, lines: &[&str]) {
        let mut idx = 0;
        while idx < lines.len() && is_planning_line(lines[idx]) {
            idx += 1;
        }
        if let Some(len) = property_drawer_len(&lines[idx..]) {
            idx += len;
        }
        let body = &lines[idx..];

        node.timestamps = scan_timestamps(&node.heading);
        for line in body {
            node.timestamps.extend(scan_timestamps(line));
        }
        node.body = body.join("\n");
    }

    fn is_planning_line(line: &str) -> bool {
        preceded(
            space0::<_, VerboseError<&str>>,
            alt((tag("SCHEDULED:"), tag("DEADLINE:"), tag("CLOSED:"))),
        )(line)
        .is_ok()
    }

    /// Line count of a `:PROPERTIES:` ... `:END:` drawer at the start of `lines`.
    /// An unterminated drawer is not a drawer.
    fn property_drawer_len(lines: &[&str]) -> Option<usize> {
        let first = lines.first()?;
        if !first.trim().eq_ignore_ascii_case(":PROPERTIES:") {
            return None;
        }
        lines
            .iter()
            .position(|l| l.trim().eq_ignore_ascii_case(":END:"))
            .map(|end| end + 1)
    }

    /* ----------------------------- Timestamps ----------------------------- */

    /// Every standalone timestamp in `text`, in order. `<a>--<b>` ranges are skipped.
    fn scan_timestamps(text: &str) -> Vec<Timestamp> {
        let mut out = Vec::new();
        let mut i = text;
        while let Some(pos) = i.find(['<', '[']) {
            let candidate = &i[pos..];
            match parse_timestamp(candidate) {
                Ok((rest, ts)) => {
                    if let Ok((after_range, _)) = range_tail(rest) {
                        i = after_range;
                    } else {
                        out.push(ts);
                        i = rest;
                    }
                }
                Err(_) => i = &candidate[1..],
            }
        }
        out
    }

    fn range_tail(i: &str) -> PResult<'_, Timestamp> {
        preceded(tag("--"), parse_timestamp)(i)
    }

    fn parse_timestamp(i: &str) -> PResult<'_, Timestamp> {
        // <YYYY-MM-DD [Day] [HH:MM] [cookies]>  or the same in [...]
        let (i, open) = alt((char('<'), char('[')))(i)?;
        let close = if open == '<' { '>' } else { ']' };
        let (i, (date, _day, time, _cookies, _, _)) = tuple((
            parse_date,
            opt(preceded(space1, take_while1(|c: char| c.is_alphabetic()))),
            opt(preceded(space1, parse_time)),
            many0(preceded(space1, parse_cookie)),
            space0,
            char(close),
        ))(i)?;
        Ok((
            i,
            Timestamp { date, time },
        ))
    }

    fn parse_date(i: &str) -> PResult<'_, NaiveDate> {
        map_res(
            tuple((
                map_res(take_while_m_n(4, 4, char_is_digit), |s: &str| {
                    s.parse::<i32>()
                }),
                char('-'),
                map_res(take_while_m_n(2, 2, char_is_digit), |s: &str| {
                    s.parse::<u32>()
                }),
                char('-'),
                map_res(take_while_m_n(2, 2, char_is_digit), |s: &str| {
                    s.parse::<u32>()
                }),
            )),
            |(y, _, m, _, d)| NaiveDate::from_ymd_opt(y, m, d).ok_or("invalid date"),
        )(i)
    }

    fn parse_time(i: &str) -> PResult<'_, NaiveTime> {
        map_res(
            tuple((
                map_res(take_while_m_n(1, 2, char_is_digit), |s: &str| {
                    s.parse::<u32>()
                }),
                char(':'),
                map_res(take_while_m_n(2, 2, char_is_digit), |s: &str| {
                    s.parse::<u32>()
                }),
            )),
            |(h, _, m)| NaiveTime::from_hms_opt(h, m, 0).ok_or("invalid time"),
        )(i)
    }

    /// Repeater or warning cookie (`+1w`, `.+2d`, `-3d`); recognized, not modeled.
    fn parse_cookie(i: &str) -> PResult<'_, &str> {
        recognize(tuple((
            alt((tag(".+"), tag("++"), tag("+"), tag("--"), tag("-"))),
            digit1,
            one_of("hdwmy"),
        )))(i)
    }

    fn char_is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

}

pub mod heading {
    //! Headline text transforms: leading `[timestamp]` token, trailing `:tag:` block.

    use crate::core::Tag;
    use nom::{
        IResult,
        bytes::complete::take_while1,
        character::complete::{char, multispace0},
        combinator::recognize,
        sequence::{terminated, tuple},
    };

    /// Drop a leading `[<date> <weekday> <time>]` token and the whitespace after it.
    pub fn strip_leading_timestamp(heading: &str) -> &str {
        match leading_timestamp(heading) {
            Ok((rest, _)) => rest,
            Err(_) => heading,
        }
    }

    fn leading_timestamp(i: &str) -> IResult<&str, &str> {
        terminated(
            recognize(tuple((
                char('['),
                take_while1(|c: char| c.is_ascii_digit() || c == '-'),
                char(' '),
                take_while1(|c: char| c.is_alphanumeric() || c == '_'),
                char(' '),
                take_while1(|c: char| c.is_ascii_digit() || c == ':'),
                char(']'),
            ))),
            multispace0,
        )(i)
    }

    /// Tags of the trailing `:a:b:` block, in order, empty segments dropped.
    pub fn extract_trailing_tags(heading: &str) -> Vec<Tag> {
        match trailing_tag_block(heading) {
            Some(start) => heading[start..]
                .split(':')
                .filter(|s| !s.is_empty())
                .map(Tag::from)
                .collect(),
            None => vec![],
        }
    }

    /// The heading without its trailing tag block and the whitespace before it.
    pub fn strip_trailing_tags(heading: &str) -> &str {
        match trailing_tag_block(heading) {
            Some(start) => heading[..start].trim_end(),
            None => heading,
        }
    }

    /// Byte offset of a trailing tag block: the last whitespace-separated word,
    /// at least two chars, starting and ending with `:`.
    fn trailing_tag_block(heading: &str) -> Option<usize> {
        let start = heading
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let block = &heading[start..];
        (block.len() >= 2 && block.starts_with(':') && block.ends_with(':')).then_some(start)
    }

}

pub mod range {
    //! Turns `last_days` / `since` / `before` into a concrete `[start, end)` window.

    use crate::config::DEFAULT_LAST_DAYS;
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

    /// Start used when only `before` is given.
    pub fn far_past_sentinel() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap_or(NaiveDate::MIN)
            .and_time(NaiveTime::default())
    }

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum RangeError {
        #[error("looking back {days} days from {now} reaches before year 1")]
        LookbackTooFar { days: u32, now: NaiveDateTime },
    }

    /// Caller-supplied range knobs. `last_days` wins over `since` for the start.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct RangeQuery {
        pub last_days: Option<u32>,
        pub since: Option<NaiveDateTime>,
        pub before: Option<NaiveDateTime>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DateRange {
        pub start: NaiveDateTime,
        /// Exclusive.
        pub end: NaiveDateTime,
    }

    impl RangeQuery {
        pub fn last_days(days: u32) -> Self {
            Self {
                last_days: Some(days),
                ..Self::default()
            }
        }

        pub fn between(since: NaiveDateTime, before: NaiveDateTime) -> Self {
            Self {
                last_days: None,
                since: Some(since),
                before: Some(before),
            }
        }

        pub fn is_unbounded(&self) -> bool {
            self.last_days.is_none() && self.since.is_none() && self.before.is_none()
        }

        pub fn resolve(&self, now: NaiveDateTime) -> Result<DateRange, RangeError> {
            let last_days = if self.is_unbounded() {
                Some(DEFAULT_LAST_DAYS)
            } else {
                self.last_days
            };

            let start = match (last_days, self.since) {
                (Some(days), _) => now
                    .checked_sub_signed(Duration::days(i64::from(days)))
                    .filter(|start| start.year() >= 1)
                    .ok_or(RangeError::LookbackTooFar { days, now })?,
                (None, Some(since)) => since,
                (None, None) => far_past_sentinel(),
            };
            let end = self
                .before
                .unwrap_or_else(|| now + Duration::days(1));

            Ok(DateRange { start, end })
        }

        /// Lower bound re-applied to merged entries; only when the caller asked for one.
        pub fn lower_bound(&self, range: &DateRange) -> Option<NaiveDateTime> {
            (self.last_days.is_some() || self.since.is_some()).then_some(range.start)
        }

        /// Exclusive upper bound re-applied to merged entries.
        pub fn upper_bound(&self) -> Option<NaiveDateTime> {
            self.before
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        }

        fn now() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 3, 15)
                .unwrap()
                .and_hms_opt(13, 45, 10)
                .unwrap()
        }

        #[test]
        fn no_parameters_means_last_seven_days() {
            let range = RangeQuery::default().resolve(now()).expect("range");
            assert_eq!(range.start, now() - Duration::days(7));
            assert!(range.end > now());
            assert_eq!(RangeQuery::default().lower_bound(&range), None);
        }

        #[test]
        fn wall_clock_default_is_close_to_now() {
            let wall = chrono::Local::now().naive_local();
            let range = RangeQuery::default().resolve(wall).expect("range");
            let expected = chrono::Local::now().naive_local() - Duration::days(7);
            assert!((range.start - expected).num_milliseconds().abs() < 1000);
            assert!(range.end > chrono::Local::now().naive_local());
        }

        #[test]
        fn since_alone_runs_to_tomorrow() {
            let q = RangeQuery {
                since: Some(day(2025, 1, 1)),
                ..RangeQuery::default()
            };
            let range = q.resolve(now()).expect("range");
            assert_eq!(range.start, day(2025, 1, 1));
            assert_eq!(range.end, now() + Duration::days(1));
            assert_eq!(q.lower_bound(&range), Some(day(2025, 1, 1)));
            assert_eq!(q.upper_bound(), None);
        }

        #[test]
        fn before_alone_starts_at_sentinel() {
            let q = RangeQuery {
                before: Some(day(2025, 2, 1)),
                ..RangeQuery::default()
            };
            let range = q.resolve(now()).expect("range");
            assert_eq!(range.start, day(2020, 1, 1));
            assert_eq!(range.end, day(2025, 2, 1));
            assert_eq!(q.lower_bound(&range), None);
        }

        #[test]
        fn since_and_before_pass_through() {
            let q = RangeQuery::between(day(2025, 1, 1), day(2025, 2, 1));
            let range = q.resolve(now()).expect("range");
            assert_eq!(range.start, day(2025, 1, 1));
            assert_eq!(range.end, day(2025, 2, 1));
        }

        #[test]
        fn last_days_wins_over_since() {
            let q = RangeQuery {
                last_days: Some(3),
                since: Some(day(2024, 1, 1)),
                before: None,
            };
            assert_eq!(q.resolve(now()).expect("range").start, now() - Duration::days(3));
        }

        #[test]
        fn contradictory_bounds_are_not_rejected() {
            let q = RangeQuery::between(day(2025, 2, 1), day(2025, 1, 1));
            let range = q.resolve(now()).expect("range");
            assert!(range.start > range.end);
        }

        #[test]
        fn lookback_before_year_one_is_rejected() {
            assert_eq!(
                RangeQuery::last_days(u32::MAX).resolve(now()),
                Err(RangeError::LookbackTooFar {
                    days: u32::MAX,
                    now: now(),
                })
            );
            assert!(RangeQuery::last_days(740_000).resolve(now()).is_err());

            let range = RangeQuery::last_days(700_000).resolve(now()).expect("range");
            assert!(range.start.year() >= 1);
        }
    }
}

pub mod locate {
    //! Monthly file discovery: `journal-YYYY-MM.org`, one per calendar month.

    use crate::config::{JOURNAL_FILE_EXTENSION, JOURNAL_FILE_PREFIX};
    use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
    use std::path::{Path, PathBuf};

    pub fn journal_file_name(month: NaiveDate) -> String {
        format!(
            "{}{}.{}",
            JOURNAL_FILE_PREFIX,
            month.format("%Y-%m"),
            JOURNAL_FILE_EXTENSION
        )
    }

    /// First-of-month dates from `start`'s month through `end`'s month, inclusive.
    pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let (Some(mut cursor), Some(last)) = (first_of_month(start), first_of_month(end)) else {
            return months;
        };
        while cursor <= last {
            months.push(cursor);
            match cursor.checked_add_months(Months::new(1)) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        months
    }

    /// Existing monthly files that may hold entries in `[start, end]`, oldest first.
    /// Missing months are skipped silently.
    pub fn locate_files(dir: &Path, start: NaiveDateTime, end: NaiveDateTime) -> Vec<PathBuf> {
        months_between(start.date(), end.date())
            .into_iter()
            .map(|month| dir.join(journal_file_name(month)))
            .filter(|path| path.exists())
            .collect()
    }

    fn first_of_month(d: NaiveDate) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(d.year(), d.month(), 1)
    }

}

pub mod extract {
    //! Monthly file → entries. Only level-4 nodes with an attached timestamp count.

    use crate::core::Entry;
    use crate::heading::{extract_trailing_tags, strip_leading_timestamp, strip_trailing_tags};
    use crate::outline::{Node, Outline, OutlineError, parse_outline};
    use log::{debug, warn};
    use std::{
        error::Error as _,
        fs, io,
        path::{Path, PathBuf},
    };

    /// Outline depth of dated entries (year / month / day / entry).
    pub const ENTRY_LEVEL: u8 = 4;

    #[derive(Debug, thiserror::Error)]
    pub enum ExtractError {
        #[error("reading {path:?}")]
        Read {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
        #[error("parsing {path:?}")]
        Parse {
            path: PathBuf,
            #[source]
            source: OutlineError,
        },
    }

    /// Entries of one file in document order, or why the file could not be used.
    pub fn try_extract_entries(path: &Path) -> Result<Vec<Entry>, ExtractError> {
        let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let outline = parse_outline(&text).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(entries_from_outline(&outline))
    }

    /// Like [`try_extract_entries`], but a bad file just contributes nothing.
    pub fn extract_entries(path: &Path) -> Vec<Entry> {
        match try_extract_entries(path) {
            Ok(entries) => {
                debug!("{} entries from {:?}", entries.len(), path);
                entries
            }
            Err(err) => {
                let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
                warn!("skipping journal file, {err}: {cause}");
                vec![]
            }
        }
    }

    pub fn entries_from_outline(outline: &Outline) -> Vec<Entry> {
        outline
            .nodes_at_level(ENTRY_LEVEL)
            .into_iter()
            .filter_map(entry_from_node)
            .collect()
    }

    fn entry_from_node(node: &Node) -> Option<Entry> {
        let stamp = node.timestamps.first()?;
        let heading = strip_leading_timestamp(&node.heading);
        let tags = extract_trailing_tags(heading);
        let title = strip_trailing_tags(heading).trim();
        Some(Entry::new(stamp.start(), title, node.body.trim(), tags))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::Tag;
        use crate::fixtures::JANUARY_2025;
        use std::fs;

        #[test]
        fn extracts_dated_entries_in_document_order() {
            let outline = parse_outline(JANUARY_2025).expect("parse");
            let entries = entries_from_outline(&outline);
            let titles: Vec<_> = entries.iter().map(|e| e.title()).collect();
            assert_eq!(
                titles,
                vec![
                    "Daily Standup",
                    "Personal Note",
                    "Code Review",
                    "Project Meeting",
                    "Take out trash",
                    "Lunch with team",
                ]
            );

            let meeting = &entries[3];
            assert_eq!(meeting.timestamp().to_string(), "2025-01-04 09:00:00");
            assert_eq!(meeting.day_of_week(), "Saturday");
            assert_eq!(
                meeting.body(),
                "Discussed new features in today's project meeting."
            );
            assert_eq!(meeting.tags(), &[Tag::from("meeting"), Tag::from("work")]);

            let note = &entries[1];
            assert!(note.tags().is_empty());
            assert_eq!(entries[4].body(), "");
        }

        #[test]
        fn body_timestamp_dates_an_undated_headline() {
            let doc = "* 2025\n** 01\n*** 05\n**** Standup :work:\n<2025-01-05 Sun 09:30>\nnotes\n";
            let entries = entries_from_outline(&parse_outline(doc).expect("parse"));
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].title(), "Standup");
            assert_eq!(entries[0].body(), "<2025-01-05 Sun 09:30>\nnotes");
            assert_eq!(entries[0].timestamp().to_string(), "2025-01-05 09:30:00");
        }

        #[test]
        fn shallow_and_deep_nodes_are_ignored() {
            let doc = "* [2025-01-01 Wed 10:00] top\n\
*** [2025-01-01 Wed 11:00] day\n\
***** [2025-01-01 Wed 12:00] too deep\n";
            assert!(entries_from_outline(&parse_outline(doc).expect("parse")).is_empty());
        }

        #[test]
        fn file_without_dated_entries_is_empty() {
            let tmp = tempfile::tempdir().expect("tempdir");
            let path = tmp.path().join("journal-2025-01.org");
            fs::write(&path, "#+title: empty\n* 2025\n** 2025-01\n*** 2025-01-01\n**** no stamp\n")
                .expect("write");
            assert!(extract_entries(&path).is_empty());
            assert!(try_extract_entries(&path).expect("parse").is_empty());
        }

        #[test]
        fn missing_file_is_empty_not_an_error() {
            let path = Path::new("/nonexistent/file.org");
            assert!(extract_entries(path).is_empty());
            assert!(matches!(
                try_extract_entries(path),
                Err(ExtractError::Read { .. })
            ));
        }

        #[test]
        fn malformed_files_degrade_to_nothing() {
            let tmp = tempfile::tempdir().expect("tempdir");

            let binary = tmp.path().join("journal-2025-02.org");
            fs::write(&binary, [0x2a, 0x20, 0xff, 0xfe, 0x0a]).expect("write");
            assert!(matches!(
                try_extract_entries(&binary),
                Err(ExtractError::Read { .. })
            ));
            assert!(extract_entries(&binary).is_empty());

            let deep = tmp.path().join("journal-2025-03.org");
            fs::write(&deep, format!("{} x\n", "*".repeat(400))).expect("write");
            assert!(matches!(
                try_extract_entries(&deep),
                Err(ExtractError::Parse { .. })
            ));
            assert!(extract_entries(&deep).is_empty());
        }
    }
}

pub mod query {
    //! Aggregation over monthly files plus the composable keyword and tag filters.
    //! Filters select subsets; they never edit entries.

    use crate::core::Entry;
    use crate::extract::extract_entries;
    use crate::locate::locate_files;
    use crate::range::{RangeError, RangeQuery};
    use chrono::NaiveDateTime;
    use log::debug;
    use std::path::Path;

    /* ------------------------------ Pipeline ------------------------------ */

    /// Entries of `dir` within the query window, sorted by timestamp.
    /// Equal timestamps keep file order, then document order.
    pub fn load_entries(
        dir: &Path,
        query: &RangeQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<Entry>, RangeError> {
        let range = query.resolve(now)?;
        debug!("resolved {:?} to {} .. {}", query, range.start, range.end);

        let files = locate_files(dir, range.start, range.end);
        debug!("{} journal files in {:?}", files.len(), dir);

        let mut entries: Vec<Entry> = files.iter().flat_map(|p| extract_entries(p)).collect();
        entries.sort_by_key(|e| e.timestamp());

        // Files are monthly; trim to the day-level window.
        Ok(filter_by_range(
            entries,
            query.lower_bound(&range),
            query.upper_bound(),
        ))
    }

    /// Keep `since <= timestamp < before`; a `None` bound is not enforced.
    pub fn filter_by_range(
        entries: Vec<Entry>,
        since: Option<NaiveDateTime>,
        before: Option<NaiveDateTime>,
    ) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|e| since.is_none_or(|s| e.timestamp() >= s))
            .filter(|e| before.is_none_or(|b| e.timestamp() < b))
            .collect()
    }

    /* --------------------------- Keyword search --------------------------- */

    /// Case-insensitive substring search; an entry matches through any enabled scope.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SearchOptions {
        pub query: String,
        pub in_title: bool,
        pub in_body: bool,
        pub in_tags: bool,
    }

    impl SearchOptions {
        /// All scopes enabled.
        pub fn new(query: impl Into<String>) -> Self {
            Self {
                query: query.into(),
                in_title: true,
                in_body: true,
                in_tags: true,
            }
        }

        pub fn matches(&self, entry: &Entry) -> bool {
            let needle = self.query.to_lowercase();
            (self.in_title && entry.title().to_lowercase().contains(&needle))
                || (self.in_body && entry.body().to_lowercase().contains(&needle))
                || (self.in_tags
                    && entry
                        .tags()
                        .iter()
                        .any(|t| t.as_str().to_lowercase().contains(&needle)))
        }
    }

    pub fn search(entries: &[Entry], options: &SearchOptions) -> Vec<Entry> {
        if options.query.is_empty() {
            return entries.to_vec();
        }
        entries
            .iter()
            .filter(|e| options.matches(e))
            .cloned()
            .collect()
    }

    /* ----------------------------- Tag filter ----------------------------- */

    /// Exclusion is checked first and always wins. `include: None` keeps everything
    /// not excluded; `Some(list)` needs at least one shared tag.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct TagFilter {
        pub include: Option<Vec<String>>,
        pub exclude: Option<Vec<String>>,
    }

    impl TagFilter {
        pub fn excluding<I, S>(tags: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                include: None,
                exclude: Some(tags.into_iter().map(Into::into).collect()),
            }
        }

        pub fn matches(&self, entry: &Entry) -> bool {
            if let Some(exclude) = &self.exclude {
                if exclude.iter().any(|t| entry.has_tag(t)) {
                    return false;
                }
            }
            match &self.include {
                Some(include) => include.iter().any(|t| entry.has_tag(t)),
                None => true,
            }
        }
    }

    pub fn filter_by_tags(entries: &[Entry], filter: &TagFilter) -> Vec<Entry> {
        entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

}

pub mod tools {
    //! The four journal tools handed to an external caller, with typed requests
    //! and responses whose JSON shape is what the caller receives.

    use crate::config::{DEFAULT_LAST_DAYS, JournalConfig};
    use crate::core::Entry;
    use crate::query::{self, SearchOptions, TagFilter};
    use crate::range::{RangeError, RangeQuery};
    use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Serialize, de::DeserializeOwned};
    use serde_json::Value;
    use std::path::{Path, PathBuf};

    /// Tag `get_recent_entries` always leaves out.
    pub const CHORE_TAG: &str = "chore";

    #[derive(Debug, thiserror::Error)]
    pub enum ToolError {
        #[error("invalid date {value:?}, expected YYYY-MM-DD")]
        InvalidDate {
            value: String,
            #[source]
            source: chrono::ParseError,
        },
        #[error("invalid arguments for {tool}: {source}")]
        InvalidArguments {
            tool: String,
            #[source]
            source: serde_json::Error,
        },
        #[error("unknown tool {0:?}")]
        UnknownTool(String),
        #[error(transparent)]
        InvalidRange(#[from] RangeError),
        #[error("encoding result: {0}")]
        Encode(#[source] serde_json::Error),
    }

    /// `YYYY-MM-DD` as local midnight; a full `YYYY-MM-DDTHH:MM[:SS]` is accepted too.
    pub fn parse_date_arg(value: &str) -> Result<NaiveDateTime, ToolError> {
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Ok(dt);
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::default()))
            .map_err(|source| ToolError::InvalidDate {
                value: value.to_string(),
                source,
            })
    }

    /// An empty string counts as "not given".
    fn optional_date(value: Option<&str>) -> Result<Option<NaiveDateTime>, ToolError> {
        match value {
            Some(v) if !v.is_empty() => parse_date_arg(v).map(Some),
            _ => Ok(None),
        }
    }

    fn range_query(
        last_days: Option<u32>,
        since: Option<&str>,
        before: Option<&str>,
    ) -> Result<RangeQuery, ToolError> {
        Ok(RangeQuery {
            last_days,
            since: optional_date(since)?,
            before: optional_date(before)?,
        })
    }

    /* ------------------------------ Requests ------------------------------ */

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct EntriesRequest {
        pub last_days: Option<u32>,
        pub since: Option<String>,
        pub before: Option<String>,
        pub journal_dir: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct SearchRequest {
        pub query: String,
        pub last_days: Option<u32>,
        pub since: Option<String>,
        pub before: Option<String>,
        #[serde(default = "enabled")]
        pub search_in_body: bool,
        #[serde(default = "enabled")]
        pub search_in_title: bool,
        #[serde(default = "enabled")]
        pub search_in_tags: bool,
        pub journal_dir: Option<PathBuf>,
    }

    fn enabled() -> bool {
        true
    }

    impl SearchRequest {
        pub fn new(query: impl Into<String>) -> Self {
            Self {
                query: query.into(),
                last_days: None,
                since: None,
                before: None,
                search_in_body: true,
                search_in_title: true,
                search_in_tags: true,
                journal_dir: None,
            }
        }
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct RecentRequest {
        #[serde(default = "default_days")]
        pub days: u32,
        pub journal_dir: Option<PathBuf>,
    }

    fn default_days() -> u32 {
        DEFAULT_LAST_DAYS
    }

    impl Default for RecentRequest {
        fn default() -> Self {
            Self {
                days: DEFAULT_LAST_DAYS,
                journal_dir: None,
            }
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct TagsRequest {
        pub tags: Option<Vec<String>>,
        pub exclude_tags: Option<Vec<String>>,
        pub last_days: Option<u32>,
        pub since: Option<String>,
        pub before: Option<String>,
        pub journal_dir: Option<PathBuf>,
    }

    /* ------------------------------ Responses ------------------------------ */

    /// Echo of the caller's range arguments, as given.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Period {
        pub last_days: Option<u32>,
        pub since: Option<String>,
        pub before: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct EntriesResponse {
        pub entries: Vec<Entry>,
        pub count: usize,
        pub period: Period,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct SearchScopes {
        pub search_in_body: bool,
        pub search_in_title: bool,
        pub search_in_tags: bool,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct SearchResponse {
        pub entries: Vec<Entry>,
        pub count: usize,
        pub query: String,
        pub search_options: SearchScopes,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct RecentResponse {
        pub entries: Vec<Entry>,
        pub count: usize,
        pub days: u32,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct TagsFilterEcho {
        pub include_tags: Option<Vec<String>>,
        pub exclude_tags: Option<Vec<String>>,
        pub last_days: Option<u32>,
        pub since: Option<String>,
        pub before: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct TagsResponse {
        pub entries: Vec<Entry>,
        pub count: usize,
        pub filter: TagsFilterEcho,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ToolDefinition {
        pub name: &'static str,
        pub description: &'static str,
    }

    /* -------------------------------- Tools -------------------------------- */

    pub struct JournalTools {
        config: JournalConfig,
        now: Option<NaiveDateTime>,
    }

    impl JournalTools {
        pub fn new(config: JournalConfig) -> Self {
            Self { config, now: None }
        }

        /// Pin "now" instead of reading the local clock on every call.
        pub fn with_now(mut self, now: NaiveDateTime) -> Self {
            self.now = Some(now);
            self
        }

        fn now(&self) -> NaiveDateTime {
            self.now.unwrap_or_else(|| Local::now().naive_local())
        }

        fn journal_dir<'a>(&'a self, requested: Option<&'a Path>) -> &'a Path {
            requested.unwrap_or(&self.config.journal_dir)
        }

        pub fn definitions() -> Vec<ToolDefinition> {
            vec![
                ToolDefinition {
                    name: "get_journal_entries",
                    description: "Retrieve journal entries for a date range (last_days, since, before as YYYY-MM-DD).",
                },
                ToolDefinition {
                    name: "search_journal",
                    description: "Search journal entries by keyword in title, body and tags (case-insensitive).",
                },
                ToolDefinition {
                    name: "get_recent_entries",
                    description: "Entries from the last N days (default 7), leaving out entries tagged chore.",
                },
                ToolDefinition {
                    name: "get_entries_by_tag",
                    description: "Filter entries by tags to include and exclude; exclusion wins.",
                },
            ]
        }

        /// Dispatch a tool call by name with JSON arguments (`null` means none).
        pub fn call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
            let result = match name {
                "get_journal_entries" => {
                    let req: EntriesRequest = arguments_for(name, arguments)?;
                    serde_json::to_value(self.get_journal_entries(&req)?)
                }
                "search_journal" => {
                    let req: SearchRequest = arguments_for(name, arguments)?;
                    serde_json::to_value(self.search_journal(&req)?)
                }
                "get_recent_entries" => {
                    let req: RecentRequest = arguments_for(name, arguments)?;
                    serde_json::to_value(self.get_recent_entries(&req)?)
                }
                "get_entries_by_tag" => {
                    let req: TagsRequest = arguments_for(name, arguments)?;
                    serde_json::to_value(self.get_entries_by_tag(&req)?)
                }
                other => return Err(ToolError::UnknownTool(other.to_string())),
            };
            result.map_err(ToolError::Encode)
        }

        pub fn get_journal_entries(&self, req: &EntriesRequest) -> Result<EntriesResponse, ToolError> {
            let range = range_query(req.last_days, req.since.as_deref(), req.before.as_deref())?;
            let entries =
                query::load_entries(self.journal_dir(req.journal_dir.as_deref()), &range, self.now())?;
            Ok(EntriesResponse {
                count: entries.len(),
                entries,
                period: Period {
                    last_days: req.last_days,
                    since: req.since.clone(),
                    before: req.before.clone(),
                },
            })
        }

        pub fn search_journal(&self, req: &SearchRequest) -> Result<SearchResponse, ToolError> {
            let range = range_query(req.last_days, req.since.as_deref(), req.before.as_deref())?;
            let loaded =
                query::load_entries(self.journal_dir(req.journal_dir.as_deref()), &range, self.now())?;
            let options = SearchOptions {
                query: req.query.clone(),
                in_title: req.search_in_title,
                in_body: req.search_in_body,
                in_tags: req.search_in_tags,
            };
            let entries = query::search(&loaded, &options);
            Ok(SearchResponse {
                count: entries.len(),
                entries,
                query: req.query.clone(),
                search_options: SearchScopes {
                    search_in_body: req.search_in_body,
                    search_in_title: req.search_in_title,
                    search_in_tags: req.search_in_tags,
                },
            })
        }

        pub fn get_recent_entries(&self, req: &RecentRequest) -> Result<RecentResponse, ToolError> {
            let loaded = query::load_entries(
                self.journal_dir(req.journal_dir.as_deref()),
                &RangeQuery::last_days(req.days),
                self.now(),
            )?;
            let entries = query::filter_by_tags(&loaded, &TagFilter::excluding([CHORE_TAG]));
            Ok(RecentResponse {
                count: entries.len(),
                entries,
                days: req.days,
            })
        }

        pub fn get_entries_by_tag(&self, req: &TagsRequest) -> Result<TagsResponse, ToolError> {
            let range = range_query(req.last_days, req.since.as_deref(), req.before.as_deref())?;
            let loaded =
                query::load_entries(self.journal_dir(req.journal_dir.as_deref()), &range, self.now())?;
            let filter = TagFilter {
                include: req.tags.clone(),
                exclude: req.exclude_tags.clone(),
            };
            let entries = query::filter_by_tags(&loaded, &filter);
            Ok(TagsResponse {
                count: entries.len(),
                entries,
                filter: TagsFilterEcho {
                    include_tags: req.tags.clone(),
                    exclude_tags: req.exclude_tags.clone(),
                    last_days: req.last_days,
                    since: req.since.clone(),
                    before: req.before.clone(),
                },
            })
        }
    }

    fn arguments_for<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
        let arguments = if arguments.is_null() {
            Value::Object(Default::default())
        } else {
            arguments
        };
        serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
            tool: tool.to_string(),
            source,
        })
    }

}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::{Entry, Tag};
    use chrono::{NaiveDate, NaiveDateTime};

    pub const JANUARY_2025: &str = "#+title: Journal 2025-01

* 2025
** 2025-01 January
*** 2025-01-03 Friday
**** [2025-01-03 Fri 10:00] Daily Standup :meeting:
Team standup meeting.
**** [2025-01-03 Fri 16:00] Personal Note
Some personal thoughts about the project.
**** Undated thought
No timestamp anywhere here.
*** 2025-01-04 Saturday
**** [2025-01-04 Sat 14:30] Code Review :code:review:
Reviewed pull requests for the authentication module.
**** [2025-01-04 Sat 09:00] Project Meeting :meeting:work:
Discussed new features in today's project meeting.
*** 2025-01-10 Friday
**** [2025-01-10 Fri 08:00] Take out trash :chore:
**** [2025-01-10 Fri 12:00] Lunch with team :work:
";

    pub const DECEMBER_2024: &str = "* 2024
** 2024-12 December
*** 2024-12-31 Tuesday
**** [2024-12-31 Tue 23:00] Year review :review:
Looking back at 2024.
";

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    pub fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new(
                at(2025, 1, 4, 9, 0),
                "Project Meeting",
                "Discussed new features in today's project meeting.",
                vec![Tag::from("meeting"), Tag::from("work")],
            ),
            Entry::new(
                at(2025, 1, 4, 14, 30),
                "Code Review",
                "Reviewed pull requests for the authentication module.",
                vec![Tag::from("code"), Tag::from("review")],
            ),
            Entry::new(
                at(2025, 1, 3, 10, 0),
                "Daily Standup",
                "Team standup meeting.",
                vec![Tag::from("meeting")],
            ),
            Entry::new(
                at(2025, 1, 3, 16, 0),
                "Personal Note",
                "Some personal thoughts about the project.",
                vec![],
            ),
        ]
    }
}
