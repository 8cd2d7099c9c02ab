mod current_identity;
