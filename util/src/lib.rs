/// Reassembles newline-delimited lines from arbitrarily sized byte chunks.
/// Partial trailing lines stay buffered until the next chunk, or until
/// `finish` flushes them at end of stream.
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    pub fn new() -> Self {
        LineFramer { buf: Vec::new() }
    }

    pub fn push(&mut self, chunk: &[u8]) -> CompleteLines<'_> {
        self.buf.extend_from_slice(chunk);
        CompleteLines { buf: &mut self.buf }
    }

    pub fn finish(self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.buf).into_owned())
        }
    }
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CompleteLines<'a> {
    buf: &'a mut Vec<u8>,
}

impl Iterator for CompleteLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}
