use std::{thread, time::Duration};

use rand::{Rng, seq::SliceRandom};

use crate::interpreter::evaluator::core::{Context, EvalResult, Flow};

/// The pool MYSTERY draws from, uniformly.
const MYSTERY_POOL: &[&str] = &["🎉 A wild treasure appeared!",
                                "🐸 Ribbit. Just... ribbit.",
                                "Nothing happened. Or did it? 🤔",
                                "⚠️  WARNING: Your keyboard is haunted.",
                                "🦆 Quack.",
                                "The answer is 42.",
                                "404: Mystery not found.",
                                "Yes.",
                                "No.",
                                "Maybe.",
                                "¯\\_(ツ)_/¯",
                                "Potato.",
                                "🌮 Taco appeared out of nowhere.",
                                "ERROR: Too much fun detected.",
                                "🕵️ Someone is watching. Probably not."];

/// The pool POGGERS draws from, uniformly.
const POGGERS_POOL: &[&str] = &["🎊 POGGERS! LETS GOOO!",
                                "W + ratio + you're built different!",
                                "🔥 ABSOLUTELY FIRE 🔥",
                                "NO CAP THAT WAS WILD 🐐",
                                "SHEEEESH 😤",
                                "This is the way. 💪",
                                "GOATED WITH THE SAUCE 🐐"];

/// Where RICKROLL sends people.
const RICKROLL_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

impl Context {
    /// `RICKROLL` — sings the line, then tries to open the video in a
    /// browser. Opening is fire-and-forget: if no browser can be launched,
    /// the program keeps running as if nothing happened.
    pub(crate) fn exec_rickroll(&self) -> EvalResult<Flow> {
        println!("♪ Never gonna give you up... ♪");
        let _ = webbrowser::open(RICKROLL_URL);
        Ok(Flow::Normal)
    }

    /// `MYSTERY` — prints a uniformly random message from the pool.
    pub(crate) fn exec_mystery(&self) -> EvalResult<Flow> {
        if let Some(message) = MYSTERY_POOL.choose(&mut rand::thread_rng()) {
            println!("{message}");
        }
        Ok(Flow::Normal)
    }

    /// `OOPS` — prints the fake crash, then owns up to it.
    pub(crate) fn exec_oops(&self) -> EvalResult<Flow> {
        println!("\n💥 CRITICAL FRANZCODE FAILURE");
        println!("   Segmentation Fault (core dumped)");
        println!("   Just kidding. You've been OOPS'd. 😈\n");
        Ok(Flow::Normal)
    }

    /// `FLIP` — flips a coin.
    pub(crate) fn exec_flip(&self) -> EvalResult<Flow> {
        if let Some(face) = ["HEADS 🪙", "TAILS 🪙"].choose(&mut rand::thread_rng()) {
            println!("Coin flip: {face}");
        }
        Ok(Flow::Normal)
    }

    /// `DICE` — rolls a six-sided die.
    pub(crate) fn exec_dice(&self) -> EvalResult<Flow> {
        let value = rand::thread_rng().gen_range(1..=6);
        println!("🎲 You rolled a {value}!");
        Ok(Flow::Normal)
    }

    /// `BRUH` — prints "bruh." and pauses a full second to let it sink in.
    pub(crate) fn exec_bruh(&self) -> EvalResult<Flow> {
        println!("bruh.");
        thread::sleep(Duration::from_secs(1));
        Ok(Flow::Normal)
    }

    /// `POGGERS` — prints a uniformly random celebration from the pool.
    pub(crate) fn exec_poggers(&self) -> EvalResult<Flow> {
        if let Some(message) = POGGERS_POOL.choose(&mut rand::thread_rng()) {
            println!("{message}");
        }
        Ok(Flow::Normal)
    }
}
