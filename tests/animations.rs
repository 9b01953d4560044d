mod common;

mod tests {
    use crate::common::{CancellingPacer, InstantPacer, RecordingSink};
    use strip_animator::color::BLACK;
    use strip_animator::{
        AnimationId, Animator, CancelToken, Completion, Duration, Rgb, SinkError, clear, wheel,
    };

    const DELAY: Duration = Duration::from_micros(0);
    const COLOR: Rgb = Rgb {
        r: 10,
        g: 20,
        b: 30,
    };

    fn animator(token: &CancelToken) -> Animator<'_, InstantPacer> {
        Animator::new(InstantPacer, token)
    }

    #[test]
    fn test_color_wipe_reveals_progressively() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(5);

        let completion = animator(&token)
            .color_wipe(&mut sink, COLOR, DELAY)
            .unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 5);
        for (step, frame) in sink.flushed.iter().enumerate() {
            for (i, pixel) in frame.iter().enumerate() {
                let expected = if i <= step { COLOR } else { BLACK };
                assert_eq!(*pixel, expected, "step {step}, pixel {i}");
            }
        }
        assert_eq!(sink.frame, vec![COLOR; 5]);
    }

    #[test]
    fn test_reverse_color_wipe_runs_descending() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(4);

        let completion = animator(&token)
            .reverse_color_wipe(&mut sink, COLOR, DELAY)
            .unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 4);
        // First flush touches only the last pixel; no index past the
        // end is ever written.
        assert_eq!(sink.flushed[0], vec![BLACK, BLACK, BLACK, COLOR]);
        assert_eq!(sink.flushed[3], vec![COLOR; 4]);
    }

    #[test]
    fn test_theater_chase_phases() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(6);

        let completion = animator(&token)
            .theater_chase(&mut sink, COLOR, DELAY, 1)
            .unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 3);
        for (q, frame) in sink.flushed.iter().enumerate() {
            for (i, pixel) in frame.iter().enumerate() {
                let expected = if i % 3 == q { COLOR } else { BLACK };
                assert_eq!(*pixel, expected, "phase {q}, pixel {i}");
            }
        }
        // Lit pixels are reset before the next phase; the strip ends dark.
        assert_eq!(sink.frame, vec![BLACK; 6]);
    }

    #[test]
    fn test_rainbow_first_frame_and_periodicity() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(5);

        let completion = animator(&token).rainbow(&mut sink, DELAY, 2).unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 512);
        for (i, pixel) in sink.flushed[0].iter().enumerate() {
            assert_eq!(*pixel, wheel(i as u8));
        }
        for j in 0..256 {
            assert_eq!(sink.flushed[j], sink.flushed[j + 256], "step {j}");
        }
    }

    #[test]
    fn test_rainbow_cycle_spreads_hue_and_repeats() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(7);

        let completion = animator(&token).rainbow_cycle(&mut sink, DELAY, 2).unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 512);
        for (i, pixel) in sink.flushed[0].iter().enumerate() {
            assert_eq!(*pixel, wheel(((i * 256 / 7) & 255) as u8));
        }
        for j in 0..256 {
            assert_eq!(sink.flushed[j], sink.flushed[j + 256], "step {j}");
        }
    }

    #[test]
    fn test_theater_chase_rainbow_wraps_at_255() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(6);

        let completion = animator(&token)
            .theater_chase_rainbow(&mut sink, DELAY)
            .unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 256 * 3);

        // Hue wraps modulo 255, one position earlier than the plain
        // rainbow's mask by 256. At step j=253, phase q=0, the pixel at
        // base index 3 carries hue (3 + 253) % 255 = 1; with a 256-wide
        // cycle it would carry hue 0 instead.
        let frame = &sink.flushed[253 * 3];
        assert_eq!(frame[3], wheel(1));
        assert_ne!(frame[3], wheel(0));
        // Exactly at the wrap: (3 + 252) % 255 = 0.
        assert_eq!(sink.flushed[252 * 3][3], wheel(0));
    }

    #[test]
    fn test_interrupt_stops_within_one_frame() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(5);
        let mut animator = Animator::new(CancellingPacer::new(&token, 2), &token);

        let completion = animator.color_wipe(&mut sink, COLOR, DELAY).unwrap();

        assert_eq!(completion, Completion::Interrupted);
        // Cancelled during the second sleep, observed after the third
        // flush; pixels 3 and 4 were never written.
        assert_eq!(sink.flushed.len(), 3);
        assert_eq!(sink.frame[..3], [COLOR, COLOR, COLOR]);
        assert_eq!(sink.frame[3..], [BLACK, BLACK]);

        // Shutdown path: exactly one clear flush, everything dark.
        clear(&mut sink).unwrap();
        assert_eq!(sink.flushed.len(), 4);
        assert_eq!(sink.last_flushed(), vec![BLACK; 5]);
    }

    #[test]
    fn test_clear_blanks_and_flushes_once() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(3);
        animator(&token).color_wipe(&mut sink, COLOR, DELAY).unwrap();

        clear(&mut sink).unwrap();

        assert_eq!(sink.flushed.len(), 4);
        assert_eq!(sink.last_flushed(), vec![BLACK; 3]);
    }

    #[test]
    fn test_zero_length_strip_is_a_no_op() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(0);
        let mut animator = animator(&token);

        assert_eq!(
            animator.color_wipe(&mut sink, COLOR, DELAY).unwrap(),
            Completion::Finished
        );
        assert!(sink.flushed.is_empty());

        // The rainbow routines still pace through their steps; every
        // frame is just empty.
        assert_eq!(
            animator.rainbow_cycle(&mut sink, DELAY, 1).unwrap(),
            Completion::Finished
        );
        assert_eq!(sink.flushed.len(), 256);
        clear(&mut sink).unwrap();
    }

    #[test]
    fn test_flush_failures_abort_after_bounded_retries() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(10);
        sink.failing_flushes = 100;

        let result = animator(&token).color_wipe(&mut sink, COLOR, DELAY);

        assert_eq!(result, Err(SinkError::HardwareWrite));
        // Default limit of 5 consecutive failures: the sixth aborts.
        assert_eq!(sink.failing_flushes, 94);
        assert!(sink.flushed.is_empty());
    }

    #[test]
    fn test_flush_failures_are_tolerated_when_transient() {
        let token = CancelToken::new();
        let mut sink = RecordingSink::new(5);
        sink.failing_flushes = 3;

        let completion = animator(&token)
            .color_wipe(&mut sink, COLOR, DELAY)
            .unwrap();

        assert_eq!(completion, Completion::Finished);
        assert_eq!(sink.flushed.len(), 2);
        assert_eq!(sink.frame, vec![COLOR; 5]);
    }

    #[test]
    fn test_run_dispatches_every_animation() {
        let token = CancelToken::new();
        let mut animator = animator(&token);
        for id in AnimationId::ALL {
            let mut sink = RecordingSink::new(4);
            let completion = animator.run(id, &mut sink, COLOR, DELAY, 1).unwrap();
            assert_eq!(completion, Completion::Finished, "{}", id.as_str());
            assert!(!sink.flushed.is_empty(), "{}", id.as_str());
        }
    }
}
