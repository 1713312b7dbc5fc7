//! Built-in quote dataset
//!
//! The fixed list the topic lookup runs against. Topics are stored
//! lowercase; queries are normalized before comparison.

use crate::models::Quote;

/// (topic, content, author) source table, in display order
const QUOTES: &[(&str, &str, &str)] = &[
    (
        "life",
        "Life is what happens when you are busy making other plans.",
        "John Lennon",
    ),
    ("life", "The purpose of our lives is to be happy.", "Dalai Lama"),
    ("life", "Get busy living or get busy dying.", "Stephen King"),
    (
        "success",
        "Success is not the key to happiness. Happiness is the key to success.",
        "Albert Schweitzer",
    ),
    (
        "success",
        "Success usually comes to those who are too busy to be looking for it.",
        "Henry David Thoreau",
    ),
    (
        "success",
        "Dont be afraid to give up the good to go for the great.",
        "John D. Rockefeller",
    ),
    (
        "love",
        "Love all, trust a few, do wrong to none.",
        "William Shakespeare",
    ),
    (
        "love",
        "We accept the love we think we deserve.",
        "Stephen Chbosky",
    ),
    (
        "love",
        "To love and be loved is to feel the sun from both sides.",
        "David Viscott",
    ),
    (
        "motivation",
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "motivation",
        "The harder you work for something, the greater you'll feel when you achieve it.",
        "Unknown",
    ),
    (
        "motivation",
        "Push yourself, because no one else is going to do it for you.",
        "Unknown",
    ),
    (
        "friendship",
        "Friendship is the only cement that will ever hold the world together.",
        "Woodrow Wilson",
    ),
    (
        "friendship",
        "A real friend is one who walks in when the rest of the world walks out.",
        "Walter Winchell",
    ),
    (
        "friendship",
        "Friendship doubles your joys and divides your sorrows.",
        "Euripides",
    ),
    (
        "wisdom",
        "Knowing yourself is the beginning of all wisdom.",
        "Aristotle",
    ),
    ("wisdom", "Turn your wounds into wisdom.", "Oprah Winfrey"),
    (
        "wisdom",
        "The only true wisdom is in knowing you know nothing.",
        "Socrates",
    ),
    (
        "creativity",
        "Creativity is intelligence having fun.",
        "Albert Einstein",
    ),
    (
        "creativity",
        "You can not use up creativity. The more you use, the more you have.",
        "Maya Angelou",
    ),
    ("creativity", "Creativity takes courage.", "Henri Matisse"),
    (
        "perseverance",
        "Perseverance is not a long race; it is many short races one after the other.",
        "Walter Elliot",
    ),
    (
        "perseverance",
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    (
        "perseverance",
        "Through perseverance many people win success out of what seemed destined to be certain failure.",
        "Benjamin Disraeli",
    ),
    (
        "sad",
        "Tears come from the heart and not from the brain.",
        "Leonardo da Vinci",
    ),
    (
        "sad",
        "Every human walks around with a certain kind of sadness. They may not wear it on their sleeves, but it's there if you look deep.",
        "Taraji P. Henson",
    ),
    (
        "sad",
        "The word \"happy\" would lose its meaning if it were not balanced by sadness.",
        "Carl Jung",
    ),
];

/// Build the built-in dataset, preserving source order
pub fn builtin_quotes() -> Vec<Quote> {
    QUOTES
        .iter()
        .map(|(topic, content, author)| Quote::with_topic(*content, *author, *topic))
        .collect()
}
