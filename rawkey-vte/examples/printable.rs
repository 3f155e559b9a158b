use rawkey_vte::{Actor, Parser};

#[derive(Default)]
struct MyActor;

impl Actor for MyActor {
    fn print(&mut self, c: char) {
        println!("print: {c:?}");
    }

    fn single_shift2(&mut self, c: char) {
        println!("ss2: {c:?}");
    }

    fn single_shift3(&mut self, c: char) {
        println!("ss3: {c:?}");
    }

    fn csi_dispatch(
        &mut self,
        private_markers: &[u8],
        params: &[u8],
        intermediates: &[u8],
        _ignored_excess_intermediates: bool,
        byte: u8,
    ) {
        println!(
            "csi: private={:?} params={:?} intermediates={:?} final={:?}",
            private_markers.escape_ascii().to_string(),
            params.escape_ascii().to_string(),
            intermediates.escape_ascii().to_string(),
            byte as char,
        );
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut actor = MyActor;

    parser.advance_str("hello\x1b[1;31m\x1bOP\x1b[?25l", &mut actor);
}
