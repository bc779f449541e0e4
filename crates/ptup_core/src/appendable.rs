//! Text sink for component rendering.

pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_char(&mut self, c: char);
    fn append_i64(&mut self, i: i64);
    fn append_f32(&mut self, f: f32);
    fn append_f64(&mut self, f: f64);
    fn append_bool(&mut self, b: bool);
}

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_char(&mut self, c: char) {
        self.push(c);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
    // Shortest round-tripping form, whole numbers keep their ".0".
    fn append_f32(&mut self, f: f32) {
        let mut buf = ryu::Buffer::new();
        self.push_str(buf.format(f));
    }
    fn append_f64(&mut self, f: f64) {
        let mut buf = ryu::Buffer::new();
        self.push_str(buf.format(f));
    }
    fn append_bool(&mut self, b: bool) {
        self.push_str(if b { "true" } else { "false" });
    }
}
