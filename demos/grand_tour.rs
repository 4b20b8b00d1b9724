//! Grand tour of every model family.
//!
//! Run with `cargo run --example grand_tour`. The library itself never
//! prints; everything shown here comes from returned reports and display
//! implementations.

use curio::{
    AudioBook, Book, DomainError, Guitar, Instrument, Mantle, PaperBook, Performance, Piano,
    Playable, Wand, Witch,
};

/// One rehearsal step for any family member.
fn rehearse(instrument: &mut impl Playable) -> Performance {
    instrument.play()
}

fn main() -> Result<(), DomainError> {
    // --- Arcana -----------------------------------------------------------

    println!("{}", Wand::SCHEMA);

    let mut wand = Wand::new(100, 100, "yew")?;
    println!("wand: {:?}", wand);
    println!("can cast spells: {}", wand.can_spell());

    wand.mend(50)?;
    println!("after mending: strength {}", wand.strength());
    if let Err(err) = wand.mend(-7) {
        println!("mend rejected: {}", err);
    }
    if let Err(err) = wand.crack(1000) {
        println!("crack rejected: {}", err);
    }

    let mut witch = Witch::new(100, 100, wand)?;
    println!("surge strength: {}", witch.magic_surge());

    let elder = Wand::new(120, 200, "elder")?;
    witch.change_wand(elder)?;
    println!("new wand material: {}", witch.wand().material());

    let drained = Wand::new(80, 0, "birch")?;
    if let Err(err) = witch.change_wand(drained) {
        println!("swap rejected: {}", err);
    }

    let mantle = Mantle::new(150, 300, "silk")?;
    println!("offer of 50 accepted: {}", mantle.accepts_offer(50)?);
    println!("offer of 300 accepted: {}", mantle.accepts_offer(300)?);
    println!("second-hand price: {}", mantle.resale_price());

    // --- Books ------------------------------------------------------------

    let book = Book::new("1984", "George Orwell")?;
    let paper = PaperBook::new("1984", "George Orwell", 349)?;
    let audio = AudioBook::new("Dune", "Frank Herbert", 306.5)?;
    println!("{}", book);
    println!("{}", paper);
    println!("{}", audio);

    if let Err(err) = PaperBook::new("1984", "George Orwell", 349.5) {
        println!("paper edition rejected: {}", err);
    }
    if let Err(err) = AudioBook::new("Dune", "Frank Herbert", 306) {
        println!("audio edition rejected: {}", err);
    }

    // --- Music ------------------------------------------------------------

    let mut triangle = Instrument::new("Triangle", 10)?;
    let mut guitar = Guitar::new("Acoustic", 25, 6)?;
    let mut piano = Piano::new("Grand", 20, 88)?;

    println!("{}", rehearse(&mut triangle));
    println!("{}", rehearse(&mut guitar));
    println!("{}", rehearse(&mut piano));

    println!("{}", guitar.play_fingerstyle());
    println!("{}", piano.press_pedal());

    println!("{}", guitar);
    println!("{}", piano);

    println!("tune to 25: {}", guitar.tune(25)?);
    println!("tune to 25 again: {}", guitar.tune(25)?);

    // A nearly dead battery of strums: decay stops at the floor.
    let mut worn = Guitar::new("Campfire", 1.5, 6)?;
    for _ in 0..5 {
        let report = rehearse(&mut worn);
        println!(
            "campfire strum: wear {}, tuning now {}",
            report.wear(),
            worn.instrument().tuning()
        );
    }

    Ok(())
}
