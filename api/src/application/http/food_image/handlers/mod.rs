pub mod identify_food_image;
