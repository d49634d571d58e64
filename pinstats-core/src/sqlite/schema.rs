// Mirrors the CREATE TABLE statement in `Sqlite::initialize`.

diesel::table! {
    posts (id) {
        id -> BigInt,
        title -> Text,
        author -> Text,
        likes -> BigInt,
        comments -> BigInt,
        category -> Text,
    }
}
