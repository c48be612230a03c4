//! Width negotiation for content that shares one line of columns.

#[derive(Debug, Clone)]
struct Segment {
    length: usize,
    min: usize,
}

/// Shrink `natural` widths until they sum to at most `available`.
///
/// The widest segment gives way first, leftmost on ties, one level at a time.
/// No segment drops below its floor from `mins` (default and minimum 1), and a
/// segment that is naturally narrower than its floor keeps its natural width.
/// When every segment sits on its floor the result may still exceed
/// `available`.
pub fn shrink_to_fit(natural: &[usize], mins: &[usize], available: usize) -> Vec<usize> {
    let mut segments = build_segments(natural, mins);

    let used: usize = segments.iter().map(|s| s.length).sum();
    if used > available {
        shrink_segments(&mut segments, used - available);
    }

    segments.into_iter().map(|segment| segment.length).collect()
}

fn build_segments(natural: &[usize], mins: &[usize]) -> Vec<Segment> {
    natural
        .iter()
        .enumerate()
        .map(|(idx, &length)| {
            let floor = mins.get(idx).copied().unwrap_or(1).max(1);
            Segment {
                length,
                min: floor.min(length),
            }
        })
        .collect()
}

fn shrink_segments(segments: &mut [Segment], mut over: usize) {
    while over > 0 {
        let Some(widest) = widest_shrinkable(segments) else {
            break;
        };

        let next = segments
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != widest)
            .map(|(_, segment)| segment.length)
            .max()
            .unwrap_or(0);

        let segment = &mut segments[widest];
        let floor = next.max(segment.min);
        let step = segment.length.saturating_sub(floor).max(1).min(over);
        segment.length -= step;
        over -= step;
    }
}

fn widest_shrinkable(segments: &[Segment]) -> Option<usize> {
    let mut widest: Option<usize> = None;
    for (idx, segment) in segments.iter().enumerate() {
        if segment.length <= segment.min {
            continue;
        }
        match widest {
            Some(best) if segments[best].length >= segment.length => {}
            _ => widest = Some(idx),
        }
    }
    widest
}
