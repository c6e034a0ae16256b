//! Scan driver: walks the input once and cuts it at delimiter matches

use log::{debug, trace};

use super::buffer::TokenBuffer;
use super::delimiter::{Delimiter, Haystack, match_at};
use super::{Piece, Span};
use crate::error::TokenizeError;

/// Counters gathered during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Separator matches consumed
    pub separators: usize,
    /// Spacer matches consumed
    pub spacers: usize,
    /// Code units consumed by separator matches
    pub separator_units: usize,
}

/// Position cursor plus the start of the text run not yet emitted
struct Cursor {
    position: usize,
    run_start: usize,
}

impl Cursor {
    /// The pending run, if it should be flushed before a delimiter
    const fn pending(&self, keep_empty: bool) -> Option<Span> {
        if self.position > self.run_start || keep_empty {
            Some(Span::new(self.run_start, self.position))
        } else {
            None
        }
    }

    /// Consume a delimiter of `len` units; the next run starts after it
    const fn skip(&mut self, len: usize) -> Span {
        let span = Span::new(self.position, self.position + len);
        self.position += len;
        self.run_start = self.position;
        span
    }
}

/// Scan `input`, mapping every emitted piece through `emit`
///
/// At each position separators are tried before spacers, each list in order,
/// and the first match wins. Unmatched positions extend the pending text run.
/// A trailing run is emitted only when non-empty, whatever `keep_empty` says.
pub(crate) fn scan<H, D, T>(
    input: &H,
    separators: &[D],
    spacers: &[D],
    keep_empty: bool,
    mut emit: impl FnMut(Piece) -> T,
) -> Result<(Vec<T>, ScanStats), TokenizeError>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    let input_len = input.units().len();
    let mut out = TokenBuffer::for_input(input_len, keep_empty)?;
    let mut stats = ScanStats::default();
    let mut cursor = Cursor {
        position: 0,
        run_start: 0,
    };

    while cursor.position < input_len {
        if let Some(m) = match_at(input, cursor.position, separators) {
            trace!("separator {} matched at {}", m.index, cursor.position);
            if let Some(span) = cursor.pending(keep_empty) {
                out.push(emit(Piece::Text { span }))?;
            }
            cursor.skip(m.len);
            stats.separators += 1;
            stats.separator_units += m.len;
        } else if let Some(m) = match_at(input, cursor.position, spacers) {
            trace!("spacer {} matched at {}", m.index, cursor.position);
            if let Some(span) = cursor.pending(keep_empty) {
                out.push(emit(Piece::Text { span }))?;
            }
            let span = cursor.skip(m.len);
            out.push(emit(Piece::Spacer {
                index: m.index,
                span,
            }))?;
            stats.spacers += 1;
        } else {
            cursor.position += 1;
        }
    }

    if cursor.position > cursor.run_start {
        out.push(emit(Piece::Text {
            span: Span::new(cursor.run_start, cursor.position),
        }))?;
    }

    debug!(
        "scanned {} unit(s) into {} token(s) ({} separator(s), {} spacer(s), keep_empty={})",
        input_len,
        out.len(),
        stats.separators,
        stats.spacers,
        keep_empty
    );
    Ok((out.finish(), stats))
}
