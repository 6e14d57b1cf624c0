/// Sample card shown by the demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleCard {
    pub id: u32,
    pub text: String,
    pub uri: String,
}

const PHOTO_URIS: [&str; 8] = [
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-04.jpg",
    "http://www.fluxdigital.co/wp-content/uploads/2015/04/Unsplash.jpg",
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-09.jpg",
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-01.jpg",
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-04.jpg",
    "http://www.fluxdigital.co/wp-content/uploads/2015/04/Unsplash.jpg",
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-09.jpg",
    "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-01.jpg",
];

pub fn sample_cards() -> Vec<SampleCard> {
    PHOTO_URIS
        .iter()
        .zip(1u32..)
        .map(|(uri, id)| SampleCard {
            id,
            text: format!("Card #{id}"),
            uri: (*uri).to_string(),
        })
        .collect()
}

/// Text rendering of a card, standing in for a drawn view.
pub fn render_card(card: &SampleCard) -> String {
    format!("{} [{}]", card.text, card.uri)
}

pub fn render_no_more_cards() -> String {
    "All Done! There's no more content here.".to_string()
}
