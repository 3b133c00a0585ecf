use std::borrow::Cow;
use std::sync::{Mutex, PoisonError};
use regex::bytes::{NoExpand, Regex};
use regex_automata::dfa::{dense, Automaton, StartKind};
use regex_automata::hybrid;
use regex_automata::nfa::thompson;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input, MatchKind};
use crate::config::constants::{POSIX_DETERMINIZE_SIZE_LIMIT, POSIX_DFA_SIZE_LIMIT, POSIX_LAZY_CACHE_CAPACITY};
use crate::errors::{RewriteError, RewriteResult};
use crate::structs::pattern_options::PatternOptions;

/// Turns raw search terms into [`Matcher`]s.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Expression text for a raw term: escaped unless it is a regex, case folding applied inline.
    pub fn build_expression(term: &str, options: &PatternOptions) -> String {
        let expression = if options.regex {
            term.to_string()
        } else {
            regex::escape(term)
        };

        if options.ignore_case {
            format!("(?i:{expression})")
        } else {
            expression
        }
    }

    /// Compile one term. With `posix` the matcher prefers the longest match at each position.
    pub fn compile(term: &str, options: &PatternOptions) -> RewriteResult<Matcher> {
        let expression = Self::build_expression(term, options);
        log::info!("🔎 Using regular expression: {expression}");

        let regex = Regex::new(&expression)
            .map_err(|e| RewriteError::pattern_error(term, &e.to_string()))?;

        let longest = if options.posix {
            Some(LongestMatch::build(&expression).map_err(|reason| RewriteError::pattern_error(term, &reason))?)
        } else {
            None
        };

        Ok(Matcher { expression, regex, longest })
    }
}

/// A compiled search term. Immutable, shared between file tasks.
#[derive(Debug)]
pub struct Matcher {
    expression: String,
    regex: Regex,
    longest: Option<LongestMatch>,
}

impl Matcher {
    /// The expression that was compiled, after escaping and case folding.
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    /// Leftmost-longest matching is enabled.
    pub const fn is_posix(&self) -> bool {
        self.longest.is_some()
    }

    /// Whether the term occurs anywhere in `haystack`.
    pub fn is_match(&self, haystack: &[u8]) -> bool {
        self.regex.is_match(haystack)
    }

    /// Replace every non-overlapping match. With `expand` the replacement may reference
    /// capture groups (`$1`, `${name}`), otherwise it is inserted verbatim.
    pub fn replace_all<'h>(&self, haystack: &'h [u8], replacement: &[u8], expand: bool) -> Cow<'h, [u8]> {
        match &self.longest {
            Some(longest) => self.replace_all_longest(longest, haystack, replacement, expand),
            None if expand => self.regex.replace_all(haystack, replacement),
            None => self.regex.replace_all(haystack, NoExpand(replacement)),
        }
    }

    fn replace_all_longest<'h>(
        &self,
        longest: &LongestMatch,
        haystack: &'h [u8],
        replacement: &[u8],
        expand: bool,
    ) -> Cow<'h, [u8]> {
        let mut output: Option<Vec<u8>> = None;
        let mut last = 0;
        let mut pos = 0;
        let mut previous_end = None;

        while pos <= haystack.len() {
            let Some(found) = self.regex.find_at(haystack, pos) else {
                break;
            };

            // The leftmost start is the same under both semantics, only the end can grow.
            let start = found.start();
            let end = longest
                .end_from(haystack, start)
                .map_or(found.end(), |end| end.max(found.end()));

            if start == end && previous_end == Some(start) {
                pos = next_boundary(haystack, end);
                continue;
            }

            let buffer = output.get_or_insert_with(|| Vec::with_capacity(haystack.len()));
            buffer.extend_from_slice(&haystack[last..start]);
            if expand {
                self.expand_longest(longest, haystack, start, end, replacement, buffer);
            } else {
                buffer.extend_from_slice(replacement);
            }

            last = end;
            previous_end = Some(end);
            pos = if start == end { next_boundary(haystack, end) } else { end };
        }

        match output {
            Some(mut buffer) => {
                buffer.extend_from_slice(&haystack[last..]);
                Cow::Owned(buffer)
            }
            None => Cow::Borrowed(haystack),
        }
    }

    fn expand_longest(
        &self,
        longest: &LongestMatch,
        haystack: &[u8],
        start: usize,
        end: usize,
        replacement: &[u8],
        buffer: &mut Vec<u8>,
    ) {
        let captures = longest
            .tail
            .captures_at(&haystack[..end], start)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == start))
            .or_else(|| self.regex.captures_at(haystack, start));

        match captures {
            Some(caps) => caps.expand(replacement, buffer),
            None => buffer.extend_from_slice(replacement),
        }
    }
}

/// Longest-match support for the POSIX dialect.
#[derive(Debug)]
struct LongestMatch {
    engine: LongestEngine,
    /// `(?:expr)\z`, resolves captures for a span whose end is already known
    tail: Regex,
}

/// Anchored forward DFA that keeps scanning past the first match.
#[derive(Debug)]
enum LongestEngine {
    Dense(dense::DFA<Vec<u32>>),
    /// Determinized during the search, memory is capped by the cache
    Lazy {
        dfa: hybrid::dfa::DFA,
        cache: Mutex<hybrid::dfa::Cache>,
    },
}

impl LongestMatch {
    fn build(expression: &str) -> Result<Self, String> {
        let engine = match Self::build_dense(expression) {
            Ok(dfa) => LongestEngine::Dense(dfa),
            Err(e) => {
                log::debug!("dense DFA for {expression} not built ({e}), using a lazy DFA");
                Self::build_lazy(expression)?
            }
        };

        let tail = Regex::new(&format!(r"(?:{expression})\z")).map_err(|e| e.to_string())?;

        Ok(Self { engine, tail })
    }

    fn build_dense(expression: &str) -> Result<dense::DFA<Vec<u32>>, dense::BuildError> {
        dense::Builder::new()
            .configure(
                dense::Config::new()
                    .match_kind(MatchKind::All)
                    .start_kind(StartKind::Anchored)
                    .unicode_word_boundary(true)
                    .determinize_size_limit(Some(POSIX_DETERMINIZE_SIZE_LIMIT))
                    .dfa_size_limit(Some(POSIX_DFA_SIZE_LIMIT)),
            )
            .syntax(syntax::Config::new().utf8(false))
            .thompson(thompson::Config::new().utf8(false))
            .build(expression)
    }

    fn build_lazy(expression: &str) -> Result<LongestEngine, String> {
        let dfa = hybrid::dfa::Builder::new()
            .configure(
                hybrid::dfa::Config::new()
                    .match_kind(MatchKind::All)
                    .unicode_word_boundary(true)
                    .cache_capacity(POSIX_LAZY_CACHE_CAPACITY),
            )
            .syntax(syntax::Config::new().utf8(false))
            .thompson(thompson::Config::new().utf8(false))
            .build(expression)
            .map_err(|e| e.to_string())?;

        let cache = Mutex::new(dfa.create_cache());
        Ok(LongestEngine::Lazy { dfa, cache })
    }

    /// End of the longest match starting exactly at `start`. `None` if the DFA gave up.
    fn end_from(&self, haystack: &[u8], start: usize) -> Option<usize> {
        let input = Input::new(haystack).range(start..).anchored(Anchored::Yes);
        let result = match &self.engine {
            LongestEngine::Dense(dfa) => dfa.try_search_fwd(&input),
            LongestEngine::Lazy { dfa, cache } => {
                let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
                dfa.try_search_fwd(&mut cache, &input)
            }
        };

        match result {
            Ok(Some(half)) => Some(half.offset()),
            Ok(None) => None,
            Err(e) => {
                log::debug!("longest-match search fell back to leftmost-first: {e}");
                None
            }
        }
    }
}

fn next_boundary(haystack: &[u8], at: usize) -> usize {
    if at >= haystack.len() {
        return at + 1;
    }

    let width = match haystack[at] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    (at + width).min(haystack.len())
}
