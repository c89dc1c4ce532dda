use std::fmt;

use crate::confirm::Confirm;
use crate::error::{Result, WavCueError};
use crate::input::TrackEntry;
use crate::timecode::format_time;

/// Gap per track at which the user must confirm.
const GREEN_PER_TRACK: f64 = 0.5;
/// Gap per track at which the run is refused.
const RED_PER_TRACK: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Track times are lengths; the total/sum mismatch is spread over all tracks.
    Duration,
    /// Track times are absolute start offsets.
    Cumulative,
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryMode::Duration => write!(f, "Duration"),
            BoundaryMode::Cumulative => write!(f, "Cumulative"),
        }
    }
}

/// Track `i` spans `points[i]..points[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySet {
    pub points: Vec<f64>,
    pub track_total: f64,
    pub adjustment_per_track: f64,
    pub gap: f64,
    pub track_count: usize,
}

impl BoundarySet {
    pub fn span(&self, track: usize) -> (f64, f64) {
        (self.points[track], self.points[track + 1])
    }
}

pub fn compute_boundaries(
    base_duration: f64,
    tracks: &[TrackEntry],
    mode: BoundaryMode,
    confirm: &mut dyn Confirm,
) -> Result<BoundarySet> {
    if tracks.is_empty() {
        return Err(WavCueError::MissingRequiredSections);
    }
    let set = match mode {
        BoundaryMode::Duration => duration_boundaries(base_duration, tracks, confirm)?,
        BoundaryMode::Cumulative => cumulative_boundaries(base_duration, tracks)?,
    };
    log::debug!("{} mode boundaries: {:?}", mode, set.points);
    Ok(set)
}

fn duration_boundaries(
    base_duration: f64,
    tracks: &[TrackEntry],
    confirm: &mut dyn Confirm,
) -> Result<BoundarySet> {
    let count = tracks.len();
    let track_total: f64 = tracks.iter().map(|t| t.seconds).sum();
    let gap = (base_duration - track_total).abs();
    let green = GREEN_PER_TRACK * count as f64;
    let red = RED_PER_TRACK * count as f64;
    log::debug!(
        "gap {:.3}s, confirm at {:.3}s, refuse at {:.3}s",
        gap,
        green,
        red
    );

    if gap >= red {
        return Err(WavCueError::MismatchTooLarge {
            gap,
            threshold: red,
        });
    }
    if gap >= green {
        let prompt = format!(
            "Warning: Large time mismatch ({:.3}s). Proceed? (y/N): ",
            gap
        );
        if !confirm.ask(&prompt)? {
            return Err(WavCueError::AbortedByUser);
        }
    }

    let adjustment_per_track = (base_duration - track_total) / count as f64;

    let mut points = Vec::with_capacity(count + 1);
    points.push(0.0);
    let mut cumulative = 0.0;
    for track in &tracks[..count - 1] {
        cumulative += track.seconds + adjustment_per_track;
        points.push(cumulative.min(base_duration));
    }
    points.push(base_duration);

    Ok(BoundarySet {
        points,
        track_total,
        adjustment_per_track,
        gap,
        track_count: count,
    })
}

fn cumulative_boundaries(base_duration: f64, tracks: &[TrackEntry]) -> Result<BoundarySet> {
    let first = tracks[0].seconds;
    if first != 0.0 {
        return Err(WavCueError::FirstTrackMustStartAtZero {
            found: format_time(first),
        });
    }
    for (idx, pair) in tracks.windows(2).enumerate() {
        if pair[1].seconds <= pair[0].seconds {
            return Err(WavCueError::StartsNotIncreasing {
                track: idx + 2,
                start: format_time(pair[1].seconds),
            });
        }
    }
    let last = tracks[tracks.len() - 1].seconds;
    if last > base_duration {
        return Err(WavCueError::LastStartExceedsDuration {
            start: format_time(last),
            duration: format_time(base_duration),
        });
    }

    let mut points: Vec<f64> = tracks.iter().map(|t| t.seconds).collect();
    points.push(base_duration);

    Ok(BoundarySet {
        points,
        track_total: base_duration,
        adjustment_per_track: 0.0,
        gap: 0.0,
        track_count: tracks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::FixedAnswer;

    fn tracks(seconds: &[f64]) -> Vec<TrackEntry> {
        seconds
            .iter()
            .enumerate()
            .map(|(i, s)| TrackEntry {
                name: format!("Track{}", i + 1),
                seconds: *s,
            })
            .collect()
    }

    /// Fails the test if a prompt is shown.
    struct NeverAsked;

    impl Confirm for NeverAsked {
        fn ask(&mut self, prompt: &str) -> Result<bool> {
            panic!("unexpected prompt: {prompt}");
        }
    }

    #[test]
    fn exact_durations_need_no_adjustment() {
        let set = compute_boundaries(
            180.0,
            &tracks(&[60.0, 60.0, 60.0]),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap();
        assert_eq!(set.points, [0.0, 60.0, 120.0, 180.0]);
        assert_eq!(set.gap, 0.0);
        assert_eq!(set.adjustment_per_track, 0.0);
        assert_eq!(set.track_total, 180.0);
        assert_eq!(set.track_count, 3);
    }

    #[test]
    fn small_gap_is_spread_evenly() {
        let set = compute_boundaries(
            181.2,
            &tracks(&[60.0, 60.0, 60.0]),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap();
        assert!((set.adjustment_per_track - 0.4).abs() < 1e-9);
        assert!((set.points[1] - 60.4).abs() < 1e-9);
        assert!((set.points[2] - 120.8).abs() < 1e-9);
        assert_eq!(set.points[3], 181.2);
    }

    #[test]
    fn negative_adjustment_shortens_tracks() {
        let set = compute_boundaries(
            179.4,
            &tracks(&[60.0, 60.0, 60.0]),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap();
        assert!((set.adjustment_per_track + 0.2).abs() < 1e-9);
        assert!((set.points[1] - 59.8).abs() < 1e-9);
        assert_eq!(*set.points.last().unwrap(), 179.4);
    }

    #[test]
    fn last_boundary_is_exactly_the_base_duration() {
        let durations = [33.333, 41.1, 12.007, 59.999, 0.5, 70.25, 18.0];
        let total: f64 = durations.iter().sum();
        let base = total + 0.123;
        let set = compute_boundaries(
            base,
            &tracks(&durations),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap();
        assert_eq!(set.points.len(), durations.len() + 1);
        assert_eq!(set.points[0], 0.0);
        assert_eq!(*set.points.last().unwrap(), base);
        let spans: f64 = set.points.windows(2).map(|w| w[1] - w[0]).sum();
        assert!((spans - base).abs() < 1e-9);
    }

    #[test]
    fn intermediate_boundaries_never_pass_the_base_duration() {
        let set = compute_boundaries(
            10.0,
            &tracks(&[10.4, 0.0]),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap();
        assert_eq!(set.points, [0.0, 10.0, 10.0]);
    }

    #[test]
    fn gap_at_red_threshold_is_fatal() {
        let err = compute_boundaries(
            185.0,
            &tracks(&[60.0, 60.0, 60.0]),
            BoundaryMode::Duration,
            &mut NeverAsked,
        )
        .unwrap_err();
        match err {
            WavCueError::MismatchTooLarge { gap, threshold } => {
                assert_eq!(gap, 5.0);
                assert_eq!(threshold, 3.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            compute_boundaries(
                183.0,
                &tracks(&[60.0, 60.0, 60.0]),
                BoundaryMode::Duration,
                &mut NeverAsked,
            ),
            Err(WavCueError::MismatchTooLarge { .. })
        ));
    }

    #[test]
    fn borderline_gap_asks_and_honours_the_answer() {
        let list = tracks(&[60.0, 60.0, 60.0]);
        let set = compute_boundaries(182.0, &list, BoundaryMode::Duration, &mut FixedAnswer(true))
            .unwrap();
        assert_eq!(set.gap, 2.0);
        assert_eq!(*set.points.last().unwrap(), 182.0);

        assert!(matches!(
            compute_boundaries(182.0, &list, BoundaryMode::Duration, &mut FixedAnswer(false)),
            Err(WavCueError::AbortedByUser)
        ));
    }

    #[test]
    fn prompt_mentions_the_gap() {
        struct Recorder(Vec<String>);
        impl Confirm for Recorder {
            fn ask(&mut self, prompt: &str) -> Result<bool> {
                self.0.push(prompt.to_string());
                Ok(true)
            }
        }

        let mut recorder = Recorder(Vec::new());
        compute_boundaries(
            181.5,
            &tracks(&[60.0, 60.0, 60.0]),
            BoundaryMode::Duration,
            &mut recorder,
        )
        .unwrap();
        assert_eq!(
            recorder.0,
            ["Warning: Large time mismatch (1.500s). Proceed? (y/N): "]
        );
    }

    #[test]
    fn cumulative_starts_pass_through() {
        let set = compute_boundaries(
            200.0,
            &tracks(&[0.0, 45.5, 120.0]),
            BoundaryMode::Cumulative,
            &mut NeverAsked,
        )
        .unwrap();
        assert_eq!(set.points, [0.0, 45.5, 120.0, 200.0]);
        assert_eq!(set.track_total, 200.0);
        assert_eq!(set.gap, 0.0);
        assert_eq!(set.adjustment_per_track, 0.0);
        assert_eq!(set.span(1), (45.5, 120.0));
    }

    #[test]
    fn cumulative_first_start_must_be_zero() {
        assert!(matches!(
            compute_boundaries(
                200.0,
                &tracks(&[0.001, 60.0]),
                BoundaryMode::Cumulative,
                &mut NeverAsked,
            ),
            Err(WavCueError::FirstTrackMustStartAtZero { .. })
        ));
    }

    #[test]
    fn cumulative_duplicate_start_is_rejected() {
        match compute_boundaries(
            200.0,
            &tracks(&[0.0, 0.0, 60.0]),
            BoundaryMode::Cumulative,
            &mut NeverAsked,
        ) {
            Err(WavCueError::StartsNotIncreasing { track, .. }) => assert_eq!(track, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn cumulative_out_of_order_start_is_rejected() {
        assert!(matches!(
            compute_boundaries(
                200.0,
                &tracks(&[0.0, 90.0, 60.0]),
                BoundaryMode::Cumulative,
                &mut NeverAsked,
            ),
            Err(WavCueError::StartsNotIncreasing { track: 3, .. })
        ));
    }

    #[test]
    fn cumulative_last_start_may_not_pass_the_end() {
        assert!(matches!(
            compute_boundaries(
                100.0,
                &tracks(&[0.0, 100.5]),
                BoundaryMode::Cumulative,
                &mut NeverAsked,
            ),
            Err(WavCueError::LastStartExceedsDuration { .. })
        ));
    }

    #[test]
    fn no_tracks_is_rejected() {
        assert!(matches!(
            compute_boundaries(10.0, &[], BoundaryMode::Duration, &mut NeverAsked),
            Err(WavCueError::MissingRequiredSections)
        ));
    }
}
