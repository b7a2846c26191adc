//! Serial byte link over `embedded-io`
//!
//! The transmit half writes until everything is accepted and then flushes.
//! The receive half polls `read_ready` once per millisecond until a byte is
//! available or the timeout runs out, so a zero timeout never blocks.

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

use tiltmorse_core::traits::{ByteSink, ByteSource, LinkError};

/// Outgoing half
pub struct SerialTx<W> {
    inner: W,
}

impl<W: Write> SerialTx<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for SerialTx<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            match self.inner.write(remaining) {
                Ok(0) => return Err(LinkError::Incomplete),
                Ok(n) => remaining = &remaining[n..],
                Err(_) => return Err(LinkError::WriteFailed),
            }
        }
        self.inner.flush().map_err(|_| LinkError::WriteFailed)
    }
}

/// Incoming half
pub struct SerialRx<R, D> {
    inner: R,
    delay: D,
}

impl<R, D> SerialRx<R, D>
where
    R: Read + ReadReady,
    D: DelayNs,
{
    pub fn new(inner: R, delay: D) -> Self {
        Self { inner, delay }
    }

    fn read_now(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

impl<R, D> ByteSource for SerialRx<R, D>
where
    R: Read + ReadReady,
    D: DelayNs,
{
    fn try_read_with_timeout(&mut self, timeout_ms: u32) -> Option<u8> {
        let mut waited_ms = 0;
        loop {
            match self.inner.read_ready() {
                Ok(true) => return self.read_now(),
                Ok(false) => {}
                Err(_) => return None,
            }
            if waited_ms >= timeout_ms {
                return None;
            }
            self.delay.delay_ms(1);
            waited_ms += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct FakeUart {
        sent: Vec<u8>,
        /// Max bytes accepted per write call
        chunk: usize,
        flushed: bool,
        pending: VecDeque<u8>,
        broken: bool,
    }

    impl ErrorType for FakeUart {
        type Error = ErrorKind;
    }

    impl Write for FakeUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, ErrorKind> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            let n = buf.len().min(self.chunk);
            self.sent.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), ErrorKind> {
            self.flushed = true;
            Ok(())
        }
    }

    impl Read for FakeUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, ErrorKind> {
            match self.pending.pop_front() {
                Some(b) => {
                    buf[0] = b;
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    impl ReadReady for FakeUart {
        fn read_ready(&mut self) -> Result<bool, ErrorKind> {
            Ok(!self.pending.is_empty())
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        waits_ms: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_ms += ns / 1_000_000;
        }
    }

    #[test]
    fn test_write_handles_short_writes() {
        let mut tx = SerialTx::new(FakeUart {
            chunk: 3,
            ..Default::default()
        });
        tx.write(b".- --.\n").unwrap();
        let uart = tx.into_inner();
        assert_eq!(uart.sent, b".- --.\n");
        assert!(uart.flushed);
    }

    #[test]
    fn test_write_errors() {
        let mut tx = SerialTx::new(FakeUart::default());
        assert_eq!(tx.write(b"x"), Err(LinkError::Incomplete));

        let mut tx = SerialTx::new(FakeUart {
            chunk: 8,
            broken: true,
            ..Default::default()
        });
        assert_eq!(tx.write(b"x"), Err(LinkError::WriteFailed));
    }

    #[test]
    fn test_zero_timeout_does_not_wait() {
        let mut rx = SerialRx::new(FakeUart::default(), CountingDelay::default());
        assert_eq!(rx.try_read_with_timeout(0), None);
        assert_eq!(rx.delay.waits_ms, 0);
    }

    #[test]
    fn test_timeout_waits_in_steps() {
        let mut rx = SerialRx::new(FakeUart::default(), CountingDelay::default());
        assert_eq!(rx.try_read_with_timeout(5), None);
        assert_eq!(rx.delay.waits_ms, 5);
    }

    #[test]
    fn test_reads_pending_bytes() {
        let mut uart = FakeUart::default();
        uart.pending.extend(b"Hi");
        let mut rx = SerialRx::new(uart, CountingDelay::default());
        assert_eq!(rx.try_read_with_timeout(0), Some(b'H'));
        assert_eq!(rx.try_read_with_timeout(10), Some(b'i'));
        assert_eq!(rx.delay.waits_ms, 0);
    }
}
