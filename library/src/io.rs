pub mod fast_io {
    use std::io::{BufWriter, Read, Stdout};
    use std::str::{from_utf8, FromStr};

    use crate::error::{Error, Result};

    pub trait InputStream {
        fn token(&mut self) -> Option<&[u8]>;

        fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
            let token = self.token().ok_or(Error::UnexpectedEof { expected })?;
            let invalid = || Error::InvalidNumber {
                token: String::from_utf8_lossy(token).into_owned(),
            };
            let text = from_utf8(token).map_err(|_| invalid())?;
            text.parse::<T>().map_err(|_| invalid())
        }
    }

    // cheap whitespace check
    fn is_whitespace(c: u8) -> bool {
        c <= b' '
    }

    pub struct InputAtOnce {
        buf: Box<[u8]>,
        cursor: usize,
    }

    impl InputAtOnce {
        pub fn new(buf: Box<[u8]>) -> Self {
            Self { buf, cursor: 0 }
        }

        fn take(&mut self, n: usize) -> &[u8] {
            let n = n.min(self.buf.len() - self.cursor);
            let slice = &self.buf[self.cursor..self.cursor + n];
            self.cursor += n;
            slice
        }
    }

    impl InputStream for InputAtOnce {
        fn token(&mut self) -> Option<&[u8]> {
            let skip = self.buf[self.cursor..]
                .iter()
                .position(|&c| !is_whitespace(c))?;
            self.cursor += skip;
            let len = self.buf[self.cursor..]
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(self.buf.len() - self.cursor);
            Some(self.take(len))
        }
    }

    pub fn read_all(mut reader: impl Read) -> Result<InputAtOnce> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(InputAtOnce::new(buf.into_boxed_slice()))
    }

    pub fn stdin_at_once() -> Result<InputAtOnce> {
        read_all(std::io::stdin().lock())
    }

    pub fn stdout_buf() -> BufWriter<Stdout> {
        BufWriter::new(std::io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::fast_io::*;
    use crate::error::Error;

    #[test]
    fn tokens() {
        let mut input = read_all(&b"  3\n10 \r\n  100\n\n-5 x1"[..]).unwrap();
        assert_eq!(input.value::<usize>("count").unwrap(), 3);
        assert_eq!(input.value::<i64>("n").unwrap(), 10);
        assert_eq!(input.value::<i64>("n").unwrap(), 100);
        assert_eq!(input.value::<i64>("n").unwrap(), -5);
        assert!(matches!(
            input.value::<i64>("n"),
            Err(Error::InvalidNumber { token }) if token == "x1"
        ));
        assert!(matches!(
            input.value::<i64>("n"),
            Err(Error::UnexpectedEof { expected: "n" })
        ));
    }

    #[test]
    fn empty_input() {
        let mut input = read_all(&b"\n \t"[..]).unwrap();
        assert!(input.token().is_none());
    }
}
