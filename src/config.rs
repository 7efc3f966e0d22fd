// Big hero shot on the home page: drop the file at /public/hero.jpg
pub fn hero_image() -> &'static str {
    "/hero.jpg"
}
