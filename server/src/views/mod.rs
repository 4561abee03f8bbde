mod advancements_view;
