fn main() {
    if let Err(e) = sign_translator_lib::run() {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}
