pub trait Printer {
    fn println(&self, output: &str);
}
