//! Canned explanation templates, one pure function per mode.
//!
//! Dispatch is a single `match` over `ModeId`; a new mode only touches
//! this module and the `ModeId` enum.

use crate::model::{InputType, ModeId};

pub(crate) fn render(mode: ModeId, input_type: InputType) -> String {
    match mode {
        ModeId::Simple => simple(input_type),
        ModeId::Detailed => detailed(input_type),
        ModeId::Eli5 => eli5(input_type),
    }
}

fn simple(input_type: InputType) -> String {
    let source = match input_type {
        InputType::Url => "This webpage discusses",
        InputType::Text => "This topic is about",
    };
    format!(
        "Here's a simplified explanation:\n\n\
         {source} the key concepts in a straightforward way. The main idea is \
         that complex topics can be broken down into digestible pieces. Think \
         of it as taking a big puzzle and focusing on one piece at a time.\n\n\
         The important takeaway: understanding comes from breaking things down \
         into smaller, manageable parts."
    )
}

fn detailed(input_type: InputType) -> String {
    let source = match input_type {
        InputType::Url => "The linked content covers",
        InputType::Text => "This concept involves",
    };
    format!(
        "Let me break this down in detail:\n\n\
         **Overview**\n\
         {source} several interconnected ideas that build upon each other. \
         First, we need to understand the foundation - the basic principles \
         that everything else relies on.\n\n\
         **Key Points**\n\
         1. The fundamental concept acts as the building block\n\
         2. Secondary elements add complexity but follow logical patterns\n\
         3. Real-world applications make the abstract concrete\n\n\
         **Practical Understanding**\n\
         Imagine you're building with blocks. Each piece has a purpose, and \
         when arranged correctly, they create something meaningful. That's \
         exactly how this works - structured, purposeful, and ultimately \
         comprehensible."
    )
}

fn eli5(input_type: InputType) -> String {
    let subject = match input_type {
        InputType::Url => "this website",
        InputType::Text => "this thing",
    };
    format!(
        "Okay, imagine you have a really big toy box full of different toys. \
         Right now, it looks super messy and confusing, right?\n\n\
         Well, {subject} is like having someone help you sort those toys into \
         groups - all the cars together, all the dolls together, all the \
         blocks together.\n\n\
         Once everything is in its group, it's SO much easier to find what you \
         want and understand what you have!\n\n\
         That's what we're doing here - taking something big and confusing and \
         putting it into groups that make sense. Cool, right? 🎨"
    )
}
