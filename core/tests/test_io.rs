// Writing rendered containers to files and arbitrary writers.

mod common;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::{self, Write};

    use super::common::{expected_u8_with, temp_path, two_traces};
    use trs_core::prelude::*;

    /// Accepts a few bytes, then fails every write.
    struct FailingSink {
        accepted: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted >= 4 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(4 - self.accepted);
            self.accepted += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

// # ✅ 1. Files

    #[test]
    fn save_writes_rendered_bytes() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = temp_path("save_writes_rendered_bytes");

        let serialiser = Serialiser::<u8>::new(two_traces()).unwrap();
        serialiser.save(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), expected_u8_with(&[]));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_truncates_existing_file() {
        let path = temp_path("save_truncates_existing_file");
        fs::write(&path, vec![0xAA; 1024]).unwrap();

        let serialiser = Serialiser::<u8>::new(two_traces()).unwrap();
        serialiser.save(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap().len(), serialiser.rendered_len());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_can_repeat() {
        let path = temp_path("save_can_repeat");
        let mut serialiser = Serialiser::<u8>::new(two_traces()).unwrap();
        serialiser.save(&path).unwrap();

        serialiser.add_trace(vec![7, 8, 9]).unwrap();
        serialiser.save(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), serialiser.render());
        fs::remove_file(&path).unwrap();
    }

// # ❌ 2. Unavailable sinks

    #[test]
    fn save_into_missing_directory() {
        let path = temp_path("missing_dir").join("nested").join("out.trs");
        let serialiser = Serialiser::<u8>::new(two_traces()).unwrap();

        let err = serialiser.save(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SinkUnavailable);
        assert!(!path.exists());
    }

    #[test]
    fn failing_writer() {
        let serialiser = Serialiser::<u8>::new(two_traces()).unwrap();
        let err = serialiser.write_to(FailingSink { accepted: 0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SinkUnavailable);
    }

// # ✅ 3. Writers

    #[test]
    fn write_to_vec() {
        let serialiser = Serialiser::<u8>::new(two_traces()).unwrap();
        let mut out = Vec::new();
        serialiser.write_to(&mut out).unwrap();
        assert_eq!(out, serialiser.render());
    }
}
