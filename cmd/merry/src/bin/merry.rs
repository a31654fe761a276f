fn main() {
    merry::main();
}
